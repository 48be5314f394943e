//! # publisher-core
//!
//! Shared types for the MCP server publisher:
//! - [`ServerDescriptor`], the `server.json` document sent to the registry
//! - [`ValidationResult`] and [`ValidationIssue`], the validator's output contract
//! - [`PublishResponse`], the registry's echo of an accepted descriptor
//! - Schema and documentation URL constants used for remediation hints

pub mod descriptor;
pub mod schema;
pub mod validation;

pub use descriptor::{PublishResponse, ServerDescriptor};
pub use validation::{IssueKind, IssueSeverity, ValidationIssue, ValidationResult};
