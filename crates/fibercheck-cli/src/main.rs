mod lookup;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::lookup::LookupArgs;

#[derive(Debug, Parser)]
#[command(name = "fibercheck-cli")]
#[command(about = "Fiber coverage lookup from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check fiber coverage for an address
    Lookup(LookupArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = fibercheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Lookup(args)) => lookup::run_lookup(&args, &config).await?,
        None => println!("fibercheck-cli: run `fibercheck-cli lookup --help` to check an address"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
