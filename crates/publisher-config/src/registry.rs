//! Registry selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Registry base URL. Empty means "not configured": the token record
    /// and then the built-in default decide.
    #[serde(default)]
    pub url: String,
}

impl RegistryConfig {
    /// The configured URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        Some(self.url.trim()).filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_url() {
        assert!(RegistryConfig::default().url().is_none());
    }

    #[test]
    fn whitespace_url_is_unset() {
        let config = RegistryConfig { url: "  ".into() };
        assert!(config.url().is_none());
    }
}
