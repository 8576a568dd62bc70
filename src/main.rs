use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use botctl::cli::commands::Args;
use botctl::cli::{handlers, interactive};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.command.is_some() {
        handlers::handle_command(args).await
    } else {
        interactive::run(args.server).await
    }
}
