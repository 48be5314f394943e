//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error")]
    Figment(#[from] figment::Error),

    /// No home directory to resolve per-user files against.
    #[error("failed to get home directory")]
    HomeDirNotFound,

    /// The token file exists but could not be read.
    #[error("failed to read token {}", .path.display())]
    TokenRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file is not a valid token record.
    #[error("invalid token data in {}", .path.display())]
    TokenParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
