use super::{RemoteError, SpotifyClient, check_response};
use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse, Session,
};

/// Creates a public, non-collaborative playlist owned by `user_id`.
///
/// Spotify allows several playlists with the same name, so an existing one is
/// not looked up first.
pub async fn create(
    client: &SpotifyClient,
    session: &Session,
    user_id: &str,
    name: &str,
    description: &str,
) -> Result<String, RemoteError> {
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: true,
        collaborative: false,
    };

    let response = client
        .http
        .post(client.api_url(&format!("/users/{}/playlists", user_id)))
        .bearer_auth(session.access_token())
        .json(&body)
        .send()
        .await?;

    let playlist = check_response(response)
        .await?
        .json::<CreatePlaylistResponse>()
        .await?;

    Ok(playlist.id)
}

pub async fn add_track(
    client: &SpotifyClient,
    session: &Session,
    playlist_id: &str,
    track_uri: &str,
) -> Result<(), RemoteError> {
    let body = AddTrackToPlaylistRequest {
        uris: vec![track_uri.to_string()],
    };

    let response = client
        .http
        .post(client.api_url(&format!("/playlists/{}/tracks", playlist_id)))
        .bearer_auth(session.access_token())
        .json(&body)
        .send()
        .await?;

    check_response(response)
        .await?
        .json::<AddTrackToPlaylistResponse>()
        .await?;

    Ok(())
}
