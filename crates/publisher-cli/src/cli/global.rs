/// Global flags available before or after subcommands.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub registry: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Default tracing filter when `MCP_PUBLISHER_LOG` is unset. Quiet wins
    /// over verbose.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
