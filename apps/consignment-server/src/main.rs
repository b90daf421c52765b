use anyhow::Result;
use clap::{Parser, Subcommand};
use shippy_bootstrap::{AppConfig, CliArgs, init_logging, shutdown_token};

use std::path::PathBuf;

/// Consignment Server - in-memory shipping consignment registry over gRPC
#[derive(Parser)]
#[command(name = "consignment-server")]
#[command(about = "Consignment Server - in-memory shipping consignment registry over gRPC")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override, e.g. 0.0.0.0:50051 (overrides config)
    #[arg(short, long)]
    listen_addr: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        listen_addr: cli.listen_addr.clone(),
        verbose: cli.verbose,
    };

    // 1) defaults -> 2) YAML (if provided) -> 3) env (SHIPPY__*) -> 4) CLI overrides
    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);
    config.validate()?;

    init_logging(&config.logging, args.verbose)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&config).await,
        Commands::Check => check_config(&config),
    }
}

async fn run(config: &AppConfig) -> Result<()> {
    tracing::info!(listen_addr = %config.server.listen_addr, "Consignment Server starting");
    let cancel = shutdown_token();
    consignment::run_server(config, cancel).await?;
    tracing::info!("Consignment Server stopped");
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}
