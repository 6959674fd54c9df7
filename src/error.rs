use std::path::PathBuf;

use crate::network::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to reach the server or it answered with an error status
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// Response body is not the JSON we expected
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,

        #[source]
        source: serde_json::Error
    },

    /// Games catalog has no entry with this exact name
    #[error("Game {game:?} not found in the catalog")]
    NotFound {
        game: String
    },

    /// None of the add-on files supports the requested game version
    #[error("Addon {addon:?} has no file for game version {version:?}")]
    VersionNotFound {
        addon: String,
        version: String
    },

    /// Failed to create the target folder or write the downloaded file
    #[error("Filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,

        #[source]
        source: std::io::Error
    },

    #[error("Invalid client configuration: {0}")]
    Config(String)
}

impl Error {
    #[inline]
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
