//! # publisher-cli
//!
//! Library half of the `mcp-publisher` binary: argument parsing, descriptor
//! loading, endpoint resolution, the publish and validate orchestrators, and
//! the validation report formatter.

pub mod cli;
pub mod commands;
pub mod descriptor;
pub mod endpoint;
pub mod error;
pub mod report;

pub use commands::publish::PublishOrchestrator;
pub use commands::validate::ValidateOrchestrator;
pub use error::CommandError;
pub use report::{IssueFormatter, IssueReport};
