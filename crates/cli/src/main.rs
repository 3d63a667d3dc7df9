use anyhow::Result;
use clap::{Parser, Subcommand};
use flora_core::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "flora")]
#[command(about = "Plant and category catalog API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen port (defaults to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Create the catalog tables if they do not exist
    InitSchema,
    /// Register dataset images as plant descriptors
    Seed {
        /// Dataset root containing `train/<class>/<image>`
        #[arg(short, long)]
        dataset_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(config, &host, port).await?;
        },
        Commands::InitSchema => {
            commands::init_schema::run(&config).await?;
        },
        Commands::Seed { dataset_dir } => {
            let root = dataset_dir.unwrap_or_else(|| config.dataset_dir.clone());
            commands::seed::run(&config, &root).await?;
        },
    }

    Ok(())
}
