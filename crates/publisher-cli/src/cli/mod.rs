use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::{Commands, PublishArgs, ValidateArgs};

/// Top-level CLI parser for the `mcp-publisher` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mcp-publisher",
    version,
    about = "Publish MCP server descriptors to the registry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Registry base URL (overrides config and the stored login)
    #[arg(long, global = true, value_name = "URL")]
    pub registry: Option<String>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            registry: self.registry.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
