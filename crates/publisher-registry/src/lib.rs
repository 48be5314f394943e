//! # publisher-registry
//!
//! HTTP client for the MCP registry's publish and validate endpoints.
//!
//! - `POST {registry}/v0/publish`: authenticated, accepts 200/201 and echoes
//!   the stored descriptor.
//! - `POST {registry}/v0/validate`: anonymous, answers 200 with a
//!   [`ValidationResult`] whose `valid` flag carries the verdict.
//!
//! Every operation is exactly one request: no retries and no client-side
//! timeout. Callers that need a deadline wrap the future themselves.

mod endpoint;
mod error;
mod http;

pub use endpoint::{DEFAULT_REGISTRY_URL, PUBLISH_PATH, RegistryEndpoint, VALIDATE_PATH};
pub use error::RegistryError;

use publisher_core::{PublishResponse, ServerDescriptor, ValidationResult};
use reqwest::header::CONTENT_TYPE;

use crate::http::read_accepted;

const PUBLISH_ACCEPTED: &[u16] = &[200, 201];
const VALIDATE_ACCEPTED: &[u16] = &[200];

/// Client for the registry API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client with the publisher's user agent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mcp-publisher/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Publish `descriptor` to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Rejected`] with the status code and raw body for
    /// any status other than 200/201 (the caller inspects 422), or another
    /// [`RegistryError`] variant if the request cannot be encoded, sent or
    /// decoded.
    pub async fn publish(
        &self,
        endpoint: &RegistryEndpoint,
        descriptor: &ServerDescriptor,
    ) -> Result<PublishResponse, RegistryError> {
        let body = descriptor
            .to_canonical_json()
            .map_err(RegistryError::Encode)?;
        let url = endpoint.url_for(PUBLISH_PATH);
        tracing::debug!(%url, name = %descriptor.name, version = %descriptor.version, "publishing descriptor");

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = endpoint.token() {
            request = request.bearer_auth(token);
        }

        let bytes = read_accepted(request.send().await?, PUBLISH_ACCEPTED).await?;
        serde_json::from_slice(&bytes).map_err(RegistryError::Decode)
    }

    /// Ask the registry to validate `descriptor` without publishing it.
    ///
    /// An invalid descriptor is an `Ok` result with `valid == false`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Rejected`] for any status other than 200, or
    /// another [`RegistryError`] variant on encode, transport or decode failure.
    pub async fn validate(
        &self,
        endpoint: &RegistryEndpoint,
        descriptor: &ServerDescriptor,
    ) -> Result<ValidationResult, RegistryError> {
        let body = descriptor
            .to_canonical_json()
            .map_err(RegistryError::Encode)?;
        let url = endpoint.url_for(VALIDATE_PATH);
        tracing::debug!(%url, name = %descriptor.name, "validating descriptor");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let bytes = read_accepted(response, VALIDATE_ACCEPTED).await?;
        serde_json::from_slice(&bytes).map_err(RegistryError::Decode)
    }
}
