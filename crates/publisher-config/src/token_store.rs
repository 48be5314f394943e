//! Read-only access to the token file written by `mcp-publisher login`.
//!
//! The file is a small JSON object, `{"token": "...", "registry": "..."}`.
//! Writing it belongs to the login flow; this module only loads it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::AuthConfig;
use crate::error::ConfigError;

/// File name of the token record under the user's home directory.
pub const TOKEN_FILE_NAME: &str = ".mcp_publisher_token";

/// Credentials recorded by a previous login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub token: String,
    /// Registry the token was issued for. Empty when login used the default.
    #[serde(rename = "registry", default)]
    pub registry_url: String,
}

impl TokenRecord {
    #[must_use]
    pub fn registry_url(&self) -> Option<&str> {
        Some(self.registry_url.as_str()).filter(|url| !url.is_empty())
    }
}

/// Location of the token file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.mcp_publisher_token`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirNotFound`] when no home directory is known.
    pub fn default_location() -> Result<Self, ConfigError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(TOKEN_FILE_NAME)))
            .ok_or(ConfigError::HomeDirNotFound)
    }

    /// Honor `auth.token_file` when set, else the default location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirNotFound`] when the default location is
    /// needed and no home directory is known.
    pub fn from_config(auth: &AuthConfig) -> Result<Self, ConfigError> {
        if auth.token_file.is_empty() {
            Self::default_location()
        } else {
            Ok(Self::new(&auth.token_file))
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the token record. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TokenRead`] if the file exists but cannot be read
    /// and [`ConfigError::TokenParse`] if it is not a token record.
    pub fn load(&self) -> Result<Option<TokenRecord>, ConfigError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no token file");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::TokenRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|source| ConfigError::TokenParse {
                path: self.path.clone(),
                source,
            })
    }
}
