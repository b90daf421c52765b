//! TCP hosting for tonic services.
//!
//! Binding is split from serving so callers can learn the bound address
//! (ephemeral ports in tests) before the server loop starts.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;
use tonic::transport::Server;

/// Parse a `host:port` listen address.
///
/// # Errors
/// Returns an error if `listen_addr` is not a valid socket address.
pub fn parse_listen_addr(listen_addr: &str) -> anyhow::Result<SocketAddr> {
    listen_addr
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid listen_addr '{listen_addr}'"))
}

/// Bind a TCP listener for the gRPC server.
///
/// # Errors
/// Returns an error if the address cannot be parsed or the port cannot be bound.
pub async fn bind_tcp(listen_addr: &str) -> anyhow::Result<TcpListener> {
    let addr = parse_listen_addr(listen_addr)?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener on {addr}"))?;
    Ok(listener)
}

/// Serve `routes` on an already-bound listener until `cancel` fires.
///
/// Each accepted connection, and each call on it, is driven on its own task
/// by the tonic/hyper stack.
///
/// # Errors
/// Returns an error if the server fails while running.
pub async fn serve_tcp(
    listener: TcpListener,
    routes: Routes,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, transport = "tcp", "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!(%bound_addr, "gRPC server stopped");
    Ok(())
}
