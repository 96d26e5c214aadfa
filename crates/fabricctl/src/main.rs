//! fabricctl - provision and inspect slices on a FABRIC testbed.
//!
//! Thin driver over the `fabric_client` service layer: reads configuration
//! from the environment, compiles topology descriptions, and prints results.

mod cli;
mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fabric_client::orchestrator::OrchestratorClient;
use fabric_client::services::{ResourcesService, SlicesService};
use fabric_client::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::from_env();
    if config.token.is_empty() {
        warn!("FABRIC_TOKEN is not set; the orchestrator will reject requests");
    }
    let orchestrator = Arc::new(OrchestratorClient::new(&config));

    match cli.command {
        cli::Commands::Slice { action } => {
            let service = SlicesService::new(orchestrator);
            commands::slice::run(&service, &config, action).await
        }
        cli::Commands::Resources(args) => {
            let service = ResourcesService::new(orchestrator);
            commands::resources::run(&service, args).await
        }
    }
}
