//! Configuration management for the Anghami to Spotify importer.
//!
//! Two sources feed the application:
//!
//! 1. The settings file (`config.toml` by default) holding the export path,
//!    Spotify credentials, the playlist name and the text output options. It
//!    is parsed once into a strongly typed [`Config`]; a missing key or a
//!    mistyped value rejects the whole file.
//! 2. Environment variables, optionally loaded from a `.env` file in the local
//!    data directory, which override the Spotify endpoints. They exist so the
//!    client can be pointed at a different API host without touching the
//!    settings file.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings file used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const DATA_DIR_NAME: &str = "anghami2spotify";

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// The validated contents of the settings file.
///
/// Only ever constructed by [`Config::from_toml_str`] (or [`load`]), so every
/// field is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub anghami: AnghamiSettings,
    pub spotify: SpotifySettings,
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnghamiSettings {
    pub html_file_path: PathBuf,
}

/// Spotify application credentials and the target playlist.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SpotifySettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub username: String,
    pub playlist_name: String,
}

// Keeps the client secret out of debug output.
impl std::fmt::Debug for SpotifySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifySettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("username", &self.username)
            .field("playlist_name", &self.playlist_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralSettings {
    pub save_to_text: bool,
    pub txt_save_path: PathBuf,
    pub txt_song_artist_separator: String,
}

impl Config {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] when a table or key is missing, a value
    /// has the wrong type, or the text is not valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigInvalid(e.message().to_string()))
    }
}

/// Loads and validates the settings file at `path`.
///
/// # Errors
///
/// - [`Error::ConfigMissing`] if no file exists at `path`
/// - [`Error::ConfigInvalid`] if the file cannot be read or does not hold a
///   complete configuration
pub async fn load(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(Error::ConfigMissing(path.to_path_buf()));
    }

    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| Error::ConfigInvalid(e.to_string()))?;

    Config::from_toml_str(&content)
}

/// Loads environment variables from `.env` in the local data directory.
///
/// The file is optional. When present it is read with `dotenv`, which never
/// overrides variables already set in the process environment.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/anghami2spotify/.env`
/// - macOS: `~/Library/Application Support/anghami2spotify/.env`
/// - Windows: `%LOCALAPPDATA%/anghami2spotify/.env`
pub fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DATA_DIR_NAME);
    path.push(".env");
    path
}

/// Base URLs of the Spotify services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    /// Web API base, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    /// OAuth authorize page.
    pub auth_url: String,
    /// OAuth token exchange endpoint.
    pub token_url: String,
}

impl SpotifyEndpoints {
    /// Reads `SPOTIFY_API_URL`, `SPOTIFY_API_AUTH_URL` and
    /// `SPOTIFY_API_TOKEN_URL`, falling back to the public Spotify endpoints.
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("SPOTIFY_API_URL", DEFAULT_API_URL),
            auth_url: env_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
        }
    }
}

impl Default for SpotifyEndpoints {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
