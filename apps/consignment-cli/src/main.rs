use anyhow::Result;
use clap::Parser;
use consignment_cli::{ClientOptions, DEFAULT_INPUT_FILE, DEFAULT_SERVER_ADDR};
use shippy_bootstrap::{LoggingConfig, init_logging};

use std::path::PathBuf;
use std::time::Duration;

/// Consignment CLI - submit a consignment JSON file to the shipping service
#[derive(Parser)]
#[command(name = "consignment-cli")]
#[command(about = "Consignment CLI - submit a consignment JSON file to the shipping service")]
#[command(version)]
struct Cli {
    /// Path to the consignment JSON document
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    file: PathBuf,

    /// Server URI
    #[arg(short, long, env = "SHIPPY_SERVER_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    server: String,

    /// List all stored consignments after creating
    #[arg(short, long)]
    list: bool,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 10)]
    connect_timeout_secs: u64,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = 30)]
    rpc_timeout_secs: u64,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::default(), cli.verbose)?;

    let opts = ClientOptions {
        file: cli.file,
        server: cli.server,
        list: cli.list,
        connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
        rpc_timeout: Duration::from_secs(cli.rpc_timeout_secs),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = consignment_cli::run(&opts, &mut stdout).await {
        tracing::error!(error = %format!("{e:#}"), "consignment-cli failed");
        return Err(e);
    }
    Ok(())
}
