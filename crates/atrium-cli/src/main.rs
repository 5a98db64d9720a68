use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod sample;

#[derive(Parser)]
#[command(name = "atrium")]
#[command(about = "Atrium CLI - venue operations console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted composer session against the sample feed
    Demo {
        /// Path to an atrium.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the recipient directory derived from the sample feed
    People {
        /// Case-insensitive name filter
        #[arg(long)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { config } => {
            let config = commands::utils::load_config(config.as_deref())?;
            commands::demo::run(config)?;
        }
        Commands::People { query } => commands::people::run(query.as_deref()),
    }

    Ok(())
}
