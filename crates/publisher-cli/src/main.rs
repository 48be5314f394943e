use clap::Parser;

use publisher_cli::{cli, commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mcp-publisher error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = publisher_config::PublisherConfig::load_with_dotenv()?;

    commands::dispatch(&cli.command, &flags, &config).await?;
    Ok(())
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MCP_PUBLISHER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
