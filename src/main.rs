//! edusim CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use edusim::cli::{commands, handle_error, Cli, Commands};
use edusim::infrastructure::config::ConfigLoader;
use edusim::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    match cli.command {
        Commands::Ops => commands::ops::execute(cli.json),
        Commands::Run {
            operation,
            count,
            subject,
            instant,
        } => commands::run::execute(&config, &operation, count, subject, instant, cli.json).await,
        Commands::Status { workload } => {
            commands::status::execute(&config, workload, cli.json).await
        }
        Commands::Monitor {
            ticks,
            interval_ms,
            workload,
        } => commands::monitor::execute(&config, ticks, interval_ms, workload, cli.json).await,
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}
