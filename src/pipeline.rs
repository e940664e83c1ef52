//! The end-to-end import run.
//!
//! ```text
//! Loaded → Parsed → (Exported) → Authenticated → PlaylistCreated → Importing → Done
//! ```
//!
//! Each step runs only if the previous one succeeded. The first fatal error is
//! returned as is; nothing already done is rolled back, so tracks added before
//! an abort stay in the playlist.

use crate::{
    config::Config,
    error::{Error, Result},
    export, import, parser,
    report::{self, Reporter},
    spotify::MusicService,
    types::TrackEntry,
};

/// What a completed import produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub playlist_id: String,
    pub entries: Vec<TrackEntry>,
    pub not_found: Vec<String>,
}

impl ImportSummary {
    pub fn added(&self) -> usize {
        self.entries.len() - self.not_found.len()
    }
}

/// Zips titles and artists into entries.
///
/// # Errors
///
/// [`Error::CountMismatch`] when the two sequences differ in length.
pub fn pair_entries(titles: Vec<String>, artists: Vec<String>) -> Result<Vec<TrackEntry>> {
    if titles.len() != artists.len() {
        return Err(Error::CountMismatch {
            titles: titles.len(),
            artists: artists.len(),
        });
    }

    Ok(titles
        .into_iter()
        .zip(artists)
        .map(|(title, artist)| TrackEntry { title, artist })
        .collect())
}

/// Reads the export configured in `config` and pairs its titles and artists.
pub async fn load_entries(config: &Config) -> Result<Vec<TrackEntry>> {
    let (titles, artists) = parser::parse_file(&config.anghami.html_file_path).await?;
    pair_entries(titles, artists)
}

/// Runs a full import against `service`.
pub async fn run<S: MusicService + ?Sized>(
    config: &Config,
    service: &S,
    reporter: &dyn Reporter,
) -> Result<ImportSummary> {
    let general = &config.general;
    let spotify = &config.spotify;

    let entries = load_entries(config).await?;
    report::playlist_details(reporter, &entries, &general.txt_song_artist_separator);

    if general.save_to_text {
        export::save_playlist_to_text(
            &entries,
            &general.txt_save_path,
            &general.txt_song_artist_separator,
        )
        .await?;
        reporter.success(&format!(
            "Playlist saved to text file {}.",
            general.txt_save_path.display()
        ));
    }

    let session = service.authenticate(spotify).await.map_err(Error::Auth)?;

    let playlist_id =
        import::create_playlist(service, &session, &spotify.username, &spotify.playlist_name)
            .await?;
    reporter.success(&format!("Playlist '{}' created.", spotify.playlist_name));

    reporter.info("Importing playlist to Spotify...");
    let not_found =
        import::import_tracks(service, &session, &playlist_id, &entries, reporter).await;
    reporter.success(&format!(
        "Playlist import completed: {} of {} tracks added.",
        entries.len() - not_found.len(),
        entries.len()
    ));

    report::not_found(reporter, &not_found);

    Ok(ImportSummary {
        playlist_id,
        entries,
        not_found,
    })
}
