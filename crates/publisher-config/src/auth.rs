//! Credential sources.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Registry token supplied directly (typically `MCP_PUBLISHER_AUTH__TOKEN`
    /// in CI). Takes precedence over the token file.
    #[serde(default)]
    pub token: String,

    /// Override for the token file location. Empty means `~/.mcp_publisher_token`.
    #[serde(default)]
    pub token_file: String,
}

impl AuthConfig {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|token| !token.is_empty())
    }
}
