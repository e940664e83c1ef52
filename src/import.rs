//! Playlist creation and population.
//!
//! Tracks are searched and added one at a time, in export order, so the
//! resulting playlist keeps the order of the Anghami export. A track that
//! cannot be matched (no search result, or a failed search or add) is recorded
//! as not found and the import moves on; only playlist creation can abort.

use crate::{
    error::{Error, Result},
    report::Reporter,
    spotify::{MusicService, PLAYLIST_DESCRIPTION, RemoteError},
    types::{Session, TrackEntry},
};

/// Creates the destination playlist and returns its id.
///
/// # Errors
///
/// [`Error::PlaylistCreate`] on any rejection by the service.
pub async fn create_playlist<S: MusicService + ?Sized>(
    service: &S,
    session: &Session,
    account: &str,
    name: &str,
) -> Result<String> {
    service
        .create_playlist(session, account, name, PLAYLIST_DESCRIPTION)
        .await
        .map_err(Error::PlaylistCreate)
}

/// Searches and adds every entry, returning the `"{title} {artist}"` labels of
/// the entries that could not be added, in their original order.
pub async fn import_tracks<S: MusicService + ?Sized>(
    service: &S,
    session: &Session,
    playlist_id: &str,
    entries: &[TrackEntry],
    reporter: &dyn Reporter,
) -> Vec<String> {
    let mut not_found = Vec::new();

    reporter.start_progress(entries.len() as u64, "Importing");
    for entry in entries {
        let query = entry.query();

        match import_track(service, session, playlist_id, &query).await {
            Ok(true) => {}
            Ok(false) => not_found.push(query.clone()),
            Err(e) => {
                reporter.error(&format!("Spotify Error: {}", e));
                not_found.push(query.clone());
            }
        }

        reporter.advance(&query);
    }
    reporter.finish_progress();

    not_found
}

/// Returns whether a match was found and added.
async fn import_track<S: MusicService + ?Sized>(
    service: &S,
    session: &Session,
    playlist_id: &str,
    query: &str,
) -> std::result::Result<bool, RemoteError> {
    match service.search_track(session, query).await? {
        Some(track) => {
            service.add_track(session, playlist_id, &track.uri).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
