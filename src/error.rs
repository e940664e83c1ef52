use std::path::PathBuf;

use thiserror::Error;

use crate::spotify::RemoteError;

/// Fatal errors that abort an import run.
///
/// Per-track failures are not part of this enum: a failed search or add is
/// recorded as a not-found entry and the run continues (see
/// [`crate::import::import_tracks`]).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file {} not found.", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Error reading configuration: {0}")]
    ConfigInvalid(String),

    #[error("HTML file {} could not be read: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Number of songs ({titles}) and artists ({artists}) do not match.")]
    CountMismatch { titles: usize, artists: usize },

    #[error("Failed to write playlist to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spotify authentication failed: {0}")]
    Auth(#[source] RemoteError),

    #[error("Failed to create Spotify playlist: {0}")]
    PlaylistCreate(#[source] RemoteError),
}

pub type Result<T> = std::result::Result<T, Error>;
