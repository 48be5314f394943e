//! Validation output contract of the registry's `/v0/validate` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::reference::SCHEMA_REFERENCES;

/// Whether an issue came from JSON-schema checks or semantic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Schema,
    Semantic,
    /// A kind this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl IssueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Semantic => "semantic",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
    #[serde(other)]
    Unknown,
}

impl IssueSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem reported by the remote validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Dotted locator of the offending field, e.g. `packages[0].version`.
    #[serde(default)]
    pub path: String,
    pub message: String,
    pub severity: IssueSeverity,
    /// Stable code identifying the rule that fired. May be empty.
    #[serde(default)]
    pub reference: String,
}

impl ValidationIssue {
    /// True when the issue concerns the `$schema` identifier and has a
    /// dedicated remediation message.
    #[must_use]
    pub fn is_schema_issue(&self) -> bool {
        SCHEMA_REFERENCES.contains(&self.reference.as_str())
    }
}

/// Full validator verdict.
///
/// `valid` is authoritative: a result may be valid and still carry warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Position and value of the first schema issue, in server order.
    #[must_use]
    pub fn first_schema_issue(&self) -> Option<(usize, &ValidationIssue)> {
        self.issues
            .iter()
            .enumerate()
            .find(|(_, issue)| issue.is_schema_issue())
    }
}
