pub mod publish;
pub mod validate;

use publisher_config::PublisherConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::error::CommandError;

/// Route a parsed command to its handler, printing progress to stdout.
pub async fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &PublisherConfig,
) -> Result<(), CommandError> {
    let mut out = std::io::stdout().lock();
    match command {
        Commands::Publish(args) => publish::handle(args, flags, config, &mut out)
            .await
            .map(|_| ()),
        Commands::Validate(args) => validate::handle(args, flags, config, &mut out)
            .await
            .map(|_| ()),
    }
}
