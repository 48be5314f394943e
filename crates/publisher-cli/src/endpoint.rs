//! Per-invocation registry endpoint resolution.
//!
//! Registry URL precedence: `--registry` flag, configured `registry.url`,
//! the registry recorded with the token, then [`DEFAULT_REGISTRY_URL`].

use publisher_config::{PublisherConfig, TokenRecord, TokenStore};
use publisher_registry::{DEFAULT_REGISTRY_URL, RegistryEndpoint};

use crate::error::CommandError;

#[must_use]
pub fn registry_url(
    flag: Option<&str>,
    config: &PublisherConfig,
    record: Option<&TokenRecord>,
) -> String {
    flag.map(str::trim)
        .filter(|url| !url.is_empty())
        .or_else(|| config.registry.url())
        .or_else(|| record.and_then(TokenRecord::registry_url))
        .unwrap_or(DEFAULT_REGISTRY_URL)
        .to_string()
}

/// Authenticated endpoint for publishing.
///
/// A configured `auth.token` wins over the token file.
pub fn publish_endpoint(
    flag: Option<&str>,
    config: &PublisherConfig,
) -> Result<RegistryEndpoint, CommandError> {
    if let Some(token) = config.auth.token() {
        return Ok(RegistryEndpoint::new(registry_url(flag, config, None)).with_token(token));
    }

    let record = TokenStore::from_config(&config.auth)?
        .load()?
        .filter(|record| !record.token.is_empty())
        .ok_or(CommandError::NotAuthenticated)?;

    Ok(RegistryEndpoint::new(registry_url(flag, config, Some(&record))).with_token(record.token))
}

/// Anonymous endpoint for validation. The token file only contributes its
/// registry URL, and problems reading it are not fatal.
#[must_use]
pub fn validate_endpoint(flag: Option<&str>, config: &PublisherConfig) -> RegistryEndpoint {
    let record = match TokenStore::from_config(&config.auth).and_then(|store| store.load()) {
        Ok(record) => record,
        Err(error) => {
            tracing::debug!(%error, "ignoring token store for validation");
            None
        }
    };
    RegistryEndpoint::new(registry_url(flag, config, record.as_ref()))
}
