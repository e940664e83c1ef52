use std::path::Path;

use crate::{
    error::{Error, Result},
    types::TrackEntry,
};

/// Renders entries as text, one `{title}{separator}{artist}` line each.
pub fn render(entries: &[TrackEntry], separator: &str) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_line(separator));
        out.push('\n');
    }
    out
}

/// Overwrites `path` with the rendered entries.
pub async fn save_playlist_to_text(
    entries: &[TrackEntry],
    path: &Path,
    separator: &str,
) -> Result<()> {
    async_fs::write(path, render(entries, separator))
        .await
        .map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}
