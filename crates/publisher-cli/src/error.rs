//! Errors surfaced by `mcp-publisher` commands.

use std::path::PathBuf;

use publisher_config::ConfigError;
use publisher_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{} not found. Run 'mcp-publisher init' to create one", .path.display())]
    DescriptorNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    InvalidDescriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("not authenticated. Run 'mcp-publisher login <method>' first")]
    NotAuthenticated,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize registry client")]
    Client(#[source] RegistryError),

    /// Publish was rejected or could not be sent. Always the root cause, even
    /// when fallback validation was attempted.
    #[error("publish failed")]
    PublishFailed(#[source] RegistryError),

    /// The validate request itself failed (not an invalid descriptor).
    #[error("validation failed")]
    ValidateRequest(#[source] RegistryError),

    /// Publish returned 422 but the validate endpoint found nothing wrong.
    #[error("validation failed")]
    ValidationFailed,

    /// Aggregated diagnostics for an invalid descriptor.
    #[error("{0}")]
    Invalid(String),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
