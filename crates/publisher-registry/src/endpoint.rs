/// Registry used when neither configuration nor the token store names one.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.modelcontextprotocol.io";

pub const PUBLISH_PATH: &str = "v0/publish";
pub const VALIDATE_PATH: &str = "v0/validate";

/// Where to send requests, and with which credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEndpoint {
    base_url: String,
    token: Option<String>,
}

impl RegistryEndpoint {
    /// Anonymous endpoint; enough for validation.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach the bearer token used by publish.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Join `suffix` onto the base URL, inserting a `/` when the base lacks one.
    #[must_use]
    pub fn url_for(&self, suffix: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{suffix}", self.base_url)
        } else {
            format!("{}/{suffix}", self.base_url)
        }
    }
}
