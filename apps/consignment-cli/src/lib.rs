//! Consignment client: load a consignment from JSON and submit it over gRPC.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use consignment_sdk::{Consignment, ConsignmentClientV1, ConsignmentGrpcClient};
use shippy_transport_grpc::CallContext;
use shippy_transport_grpc::client::ChannelConfig;

pub const DEFAULT_SERVER_ADDR: &str = "http://localhost:50051";
pub const DEFAULT_INPUT_FILE: &str = "consignment.json";

/// Read and parse a single consignment JSON document.
///
/// Absent fields take their zero value; unknown fields are ignored.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid consignment document.
pub fn parse_file(path: &Path) -> Result<Consignment> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read consignment file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse consignment file {}", path.display()))
}

/// Resolved client invocation.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub file: PathBuf,
    pub server: String,
    pub list: bool,
    pub connect_timeout: Duration,
    pub rpc_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INPUT_FILE),
            server: DEFAULT_SERVER_ADDR.to_owned(),
            list: false,
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
        }
    }
}

/// Submit the consignment in `opts.file`; with `opts.list`, write every stored
/// consignment to `out` as one JSON object per line.
///
/// Returns the `created` flag reported by the server.
///
/// # Errors
/// Returns an error on file, parse, connection or remote-call failure.
pub async fn run<W: Write>(opts: &ClientOptions, out: &mut W) -> Result<bool> {
    let consignment = parse_file(&opts.file)?;

    let cfg = ChannelConfig::default()
        .with_connect_timeout(opts.connect_timeout)
        .with_call_timeout(opts.rpc_timeout);
    let client = ConsignmentGrpcClient::connect_with_config(opts.server.clone(), &cfg)
        .await
        .with_context(|| format!("could not connect to {}", opts.server))?;

    let ctx = CallContext::with_timeout(opts.rpc_timeout);
    let response = client
        .create_consignment(&ctx, consignment)
        .await
        .context("could not create consignment")?;
    tracing::info!(created = response.created, "consignment submitted");

    if opts.list {
        let ctx = CallContext::with_timeout(opts.rpc_timeout);
        let all = client
            .list_consignments(&ctx)
            .await
            .context("could not list consignments")?;
        tracing::info!(count = all.len(), "consignments listed");
        for c in &all {
            serde_json::to_writer(&mut *out, c)?;
            writeln!(out)?;
        }
    }

    Ok(response.created)
}
