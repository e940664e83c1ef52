use super::{RemoteError, SpotifyClient, check_response};
use crate::types::{SearchResponse, Session, Track};

/// Searches tracks for `query` and returns the first hit.
///
/// Requests a single result (`limit=1`); ranking is left entirely to Spotify.
pub async fn first_track(
    client: &SpotifyClient,
    session: &Session,
    query: &str,
) -> Result<Option<Track>, RemoteError> {
    let response = client
        .http
        .get(client.api_url("/search"))
        .bearer_auth(session.access_token())
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .send()
        .await?;

    let res = check_response(response)
        .await?
        .json::<SearchResponse>()
        .await?;

    Ok(res.tracks.items.into_iter().next())
}
