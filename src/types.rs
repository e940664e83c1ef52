use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of the Anghami export, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub title: String,
    pub artist: String,
}

impl TrackEntry {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Free-text search query, also the label used in the not-found list.
    pub fn query(&self) -> String {
        format!("{} {}", self.title, self.artist)
    }

    /// Renders the entry as one line of the text export.
    pub fn to_line(&self, separator: &str) -> String {
        format!("{}{}{}", self.title, separator, self.artist)
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw body of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
            scope: res.scope,
            expires_in: res.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// An authorized handle for the destination service.
///
/// Created once by `MusicService::authenticate` and borrowed by every
/// subsequent call. Never written to disk.
#[derive(Debug, Clone)]
pub struct Session {
    token: Token,
}

impl Session {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    /// Builds a session around a bare access token.
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self::new(Token {
            access_token: access_token.into(),
            refresh_token: None,
            scope: String::new(),
            expires_in: 3600,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn scope(&self) -> &str {
        &self.token.scope
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.token.obtained_at as i64, 0)
            .map(|obtained| obtained + Duration::seconds(self.token.expires_in as i64))
    }
}

/// What the OAuth callback delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Code(String),
    Denied(String),
    StateMismatch,
}

/// Shared between the authorization flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub expected_state: String,
    pub outcome: Option<CallbackOutcome>,
}

impl PendingAuth {
    pub fn new(expected_state: impl Into<String>) -> Self {
        Self {
            expected_state: expected_state.into(),
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Error body returned by the Web API, `{"error": {"status": .., "message": ..}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Error body returned by the accounts service, `{"error": .., "error_description": ..}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
