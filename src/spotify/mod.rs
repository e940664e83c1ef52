//! # Spotify Integration Module
//!
//! The destination service seen through the [`MusicService`] trait: four
//! operations, each a single request with no retry. The importer only depends
//! on the trait, so it runs unchanged against [`SpotifyClient`] or a test fake.
//!
//! ```text
//! pipeline / import
//!          ↓
//!    MusicService ── authenticate, create_playlist, search_track, add_track
//!          ↓
//!    SpotifyClient
//!     ├── auth      (authorization code + PKCE, local callback server)
//!     ├── search    (GET /search)
//!     └── playlist  (POST /users/{id}/playlists, POST /playlists/{id}/tracks)
//!          ↓
//!    reqwest → Spotify Web API
//! ```
//!
//! Endpoints come from [`SpotifyEndpoints`]; the access token lives in the
//! [`Session`] returned by `authenticate` and is passed to every later call.

pub mod auth;
pub mod playlist;
pub mod search;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;

use crate::{
    config::{SpotifyEndpoints, SpotifySettings},
    report::Reporter,
    types::{ApiErrorResponse, AuthErrorResponse, Session, Track},
};

/// Permission requested during authorization.
pub const SCOPE: &str = "playlist-modify-public";

/// Description set on every created playlist.
pub const PLAYLIST_DESCRIPTION: &str = "Imported from Anghami";

/// A failed interaction with the remote service.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Status { status: u16, message: String },

    #[error("Authorization denied: {0}")]
    Denied(String),

    #[error("Authorization callback state did not match")]
    StateMismatch,

    #[error("Invalid redirect URL: {0}")]
    InvalidRedirect(String),

    #[error("Callback server failed: {0}")]
    Server(String),

    #[error("Authorization timed out after {0} seconds")]
    Timeout(u64),
}

/// The remote capabilities an import needs.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Runs the authorization handshake and returns a session scoped to
    /// [`SCOPE`].
    async fn authenticate(&self, credentials: &SpotifySettings) -> Result<Session, RemoteError>;

    /// Creates a public playlist for `user_id` and returns its id.
    async fn create_playlist(
        &self,
        session: &Session,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, RemoteError>;

    /// Returns the top track result for `query`, if any.
    async fn search_track(&self, session: &Session, query: &str)
    -> Result<Option<Track>, RemoteError>;

    /// Appends a single track to the end of the playlist.
    async fn add_track(
        &self,
        session: &Session,
        playlist_id: &str,
        track_uri: &str,
    ) -> Result<(), RemoteError>;
}

/// [`MusicService`] backed by the Spotify Web API.
pub struct SpotifyClient {
    http: Client,
    endpoints: SpotifyEndpoints,
    reporter: Arc<dyn Reporter>,
}

impl SpotifyClient {
    pub fn new(endpoints: SpotifyEndpoints, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            http: Client::new(),
            endpoints,
            reporter,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.api_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MusicService for SpotifyClient {
    async fn authenticate(&self, credentials: &SpotifySettings) -> Result<Session, RemoteError> {
        auth::authorize(
            &self.http,
            &self.endpoints,
            credentials,
            self.reporter.as_ref(),
        )
        .await
    }

    async fn create_playlist(
        &self,
        session: &Session,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, RemoteError> {
        playlist::create(self, session, user_id, name, description).await
    }

    async fn search_track(
        &self,
        session: &Session,
        query: &str,
    ) -> Result<Option<Track>, RemoteError> {
        search::first_track(self, session, query).await
    }

    async fn add_track(
        &self,
        session: &Session,
        playlist_id: &str,
        track_uri: &str,
    ) -> Result<(), RemoteError> {
        playlist::add_track(self, session, playlist_id, track_uri).await
    }
}

/// Passes successful responses through and turns the rest into
/// [`RemoteError::Status`], keeping Spotify's error message when the body has
/// one.
pub(crate) async fn check_response(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if let Ok(api) = serde_json::from_str::<ApiErrorResponse>(&body) {
        api.error.message
    } else if let Ok(auth) = serde_json::from_str::<AuthErrorResponse>(&body) {
        auth.error_description.unwrap_or(auth.error)
    } else if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body
    };

    Err(RemoteError::Status {
        status: status.as_u16(),
        message,
    })
}
