use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Publish a server.json to the registry.
    Publish(PublishArgs),
    /// Validate a server.json without publishing.
    #[command(
        long_about = "Validate a server.json file without publishing.\n\n\
            The validate command performs exhaustive validation, reporting all issues at once.\n\
            It validates JSON syntax, schema compliance, and semantic rules."
    )]
    Validate(ValidateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PublishArgs {
    /// Path to server.json file
    #[arg(default_value = "server.json")]
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Path to server.json file
    #[arg(default_value = "server.json")]
    pub file: PathBuf,
}
