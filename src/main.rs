use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::relay::FieldArgs;

#[derive(Parser)]
#[command(name = "relaykey")]
#[command(about = "Register and edit Relay public keys")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.relaykey/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new relay key
    Add {
        /// Organization slug (defaults to defaults.org_slug from the config)
        #[arg(long)]
        org: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Public key of the relay
        #[arg(long)]
        public_key: Option<String>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit the name and description of a relay key
    Edit {
        /// Organization slug (defaults to defaults.org_slug from the config)
        #[arg(long)]
        org: Option<String>,

        /// Public key of the relay to edit
        #[arg(long)]
        public_key: String,

        /// New display name (keeps the stored one if omitted)
        #[arg(long)]
        name: Option<String>,

        /// New description (keeps the stored one if omitted)
        #[arg(long)]
        description: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Add {
            org,
            name,
            public_key,
            description,
        } => {
            let args = FieldArgs {
                name,
                public_key,
                description,
            };
            cli::relay::add_command(args, cli.config, org).await?;
        }
        Commands::Edit {
            org,
            public_key,
            name,
            description,
        } => {
            let args = FieldArgs {
                name,
                public_key: None,
                description,
            };
            cli::relay::edit_command(public_key, args, cli.config, org).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force).await?;
        }
    }

    Ok(())
}
