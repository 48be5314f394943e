//! Registry error types.

use thiserror::Error;

/// Errors that can occur when talking to the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The request could not be sent (DNS, connect, TLS, ...).
    #[error("error sending request")]
    Http(#[from] reqwest::Error),

    /// The response body could not be read.
    #[error("error reading response")]
    Body(#[source] reqwest::Error),

    /// The descriptor could not be encoded.
    #[error("error serializing request")]
    Encode(#[source] serde_json::Error),

    /// The registry answered with a status the operation does not accept.
    #[error("server returned status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the registry.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// An accepted response could not be decoded.
    #[error("error parsing response")]
    Decode(#[source] serde_json::Error),
}

impl RegistryError {
    /// Status code carried by a [`RegistryError::Rejected`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_exposes_status_and_body() {
        let err = RegistryError::Rejected {
            status: 422,
            body: r#"{"message":"invalid schema"}"#.into(),
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(
            err.to_string(),
            r#"server returned status 422: {"message":"invalid schema"}"#
        );
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RegistryError::Decode(source);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "error parsing response");
        assert!(std::error::Error::source(&err).is_some());
    }
}
