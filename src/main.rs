use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use command_center::config::AppConfig;
use command_center::server;

#[derive(Parser)]
#[command(name = "command-center")]
#[command(version, about = "Aggregates GitHub issues/PRs into labeled work queues")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the queue aggregation server
    Serve {
        /// Override the listen port (default 4180, or PORT from the env)
        #[arg(short, long)]
        port: Option<u16>,
        /// Bind externally and allow permissive CORS for UI development
        #[arg(long)]
        dev: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, dev } => {
            let mut config = AppConfig::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            config.dev_mode |= dev;
            server::start_server(config).await
        }
    }
}
