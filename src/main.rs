use anyhow::Result;
use clap::Parser;
use ferret::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Scan(cmd) => cmd.execute().await?,
        Commands::Sweep(cmd) => cmd.execute().await?,
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with rendered results.
fn init_tracing(verbose: bool) {
    let default = if verbose { "ferret=debug" } else { "ferret=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
