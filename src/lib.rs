//! Anghami to Spotify playlist importer
//!
//! Reads a playlist exported from Anghami as an HTML page, optionally writes
//! it to a text file, and recreates it as a public Spotify playlist by
//! searching every track. Tracks without a search result are reported at the
//! end of the run.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Settings file and environment
//! - `error` - Fatal error taxonomy
//! - `export` - Text file export
//! - `import` - Playlist creation and track import
//! - `parser` - Title and artist extraction from the HTML export
//! - `pipeline` - The end-to-end run
//! - `report` - Operator output
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client behind the `MusicService` trait
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE and redirect helpers
//!
//! # Example
//!
//! ```
//! use anghami2spotify::{config, pipeline, report::ConsoleReporter, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> anghami2spotify::Result<()> {
//!     let config = config::load("config.toml".as_ref()).await?;
//!     let reporter = std::sync::Arc::new(ConsoleReporter::new());
//!     let client = SpotifyClient::new(config::SpotifyEndpoints::from_env(), reporter.clone());
//!     let summary = pipeline::run(&config, &client, &*reporter).await?;
//!     println!("{} tracks not found", summary.not_found.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
