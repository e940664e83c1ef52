use std::{path::Path, process::ExitCode};

use crate::{
    export::save_playlist_to_text,
    pipeline,
    report::{ConsoleReporter, Reporter},
};

/// Writes the text export whether or not `save_to_text` is enabled.
pub async fn export(config_path: &Path) -> ExitCode {
    let reporter = ConsoleReporter::new();

    let Some(config) = super::load_config(config_path, &reporter).await else {
        return ExitCode::FAILURE;
    };
    let general = &config.general;

    let result = match pipeline::load_entries(&config).await {
        Ok(entries) => save_playlist_to_text(
            &entries,
            &general.txt_save_path,
            &general.txt_song_artist_separator,
        )
        .await
        .map(|_| entries.len()),
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => {
            reporter.success(&format!(
                "{} tracks saved to {}.",
                count,
                general.txt_save_path.display()
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
