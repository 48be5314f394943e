//! Schema identifiers and migration documentation links.

/// The `$schema` URL the registry currently accepts for new servers.
pub const CURRENT_SCHEMA_URL: &str =
    "https://static.modelcontextprotocol.io/schemas/2025-12-11/server.schema.json";

/// Base changelog URL for the `server.json` format.
pub const CHANGELOG_URL: &str = "https://github.com/modelcontextprotocol/registry/blob/main/docs/reference/server-json/CHANGELOG.md";

const CHECKLIST_ANCHOR: &str = "#migration-checklist-for-publishers";

/// Stable reference codes emitted by the remote validator.
pub mod reference {
    pub const SCHEMA_FIELD_REQUIRED: &str = "schema-field-required";
    pub const SCHEMA_VERSION_DEPRECATED: &str = "schema-version-deprecated";
    pub const SCHEMA_VERSION_EXTRACTION_ERROR: &str = "schema-version-extraction-error";
    pub const SEMANTIC_VERSION_RANGE: &str = "semantic-version-range";

    /// References that concern the descriptor's `$schema` identifier.
    pub const SCHEMA_REFERENCES: [&str; 3] = [
        SCHEMA_FIELD_REQUIRED,
        SCHEMA_VERSION_DEPRECATED,
        SCHEMA_VERSION_EXTRACTION_ERROR,
    ];
}

/// The pair of documentation links appended to every schema remediation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationLinks {
    pub checklist: String,
    pub changelog: String,
}

impl MigrationLinks {
    /// Derive both links from a changelog base URL.
    #[must_use]
    pub fn from_changelog(base: &str) -> Self {
        Self {
            checklist: format!("{base}{CHECKLIST_ANCHOR}"),
            changelog: base.to_string(),
        }
    }
}

impl Default for MigrationLinks {
    fn default() -> Self {
        Self::from_changelog(CHANGELOG_URL)
    }
}
