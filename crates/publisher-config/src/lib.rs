//! # publisher-config
//!
//! Layered configuration loading for the MCP server publisher using figment,
//! plus the token store written by `mcp-publisher login`.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MCP_PUBLISHER_*` prefix, `__` as separator)
//! 2. Project-level `.mcp-publisher.toml`
//! 3. User-level `~/.config/mcp-publisher/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `MCP_PUBLISHER_REGISTRY__URL` -> `registry.url`,
//! `MCP_PUBLISHER_AUTH__TOKEN` -> `auth.token`,
//! `MCP_PUBLISHER_AUTH__TOKEN_FILE` -> `auth.token_file`.
//!
//! # Usage
//!
//! ```no_run
//! use publisher_config::{PublisherConfig, TokenStore};
//!
//! let config = PublisherConfig::load_with_dotenv().expect("config");
//! let store = TokenStore::from_config(&config.auth).expect("token store");
//! if let Some(record) = store.load().expect("token file") {
//!     println!("logged in for {:?}", record.registry_url());
//! }
//! ```

mod auth;
mod error;
mod registry;
pub mod token_store;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use registry::RegistryConfig;
pub use token_store::{TOKEN_FILE_NAME, TokenRecord, TokenStore};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "MCP_PUBLISHER_";
const PROJECT_CONFIG_FILE: &str = ".mcp-publisher.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PublisherConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl PublisherConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            tracing::warn!(%error, "failed to load .env; continuing without it");
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcp-publisher").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = PublisherConfig::default();
        assert!(config.registry.url().is_none());
        assert!(config.auth.token().is_none());
        assert!(config.auth.token_file.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PublisherConfig = PublisherConfig::figment().extract()?;
            assert!(config.registry.url().is_none());
            Ok(())
        });
    }
}
