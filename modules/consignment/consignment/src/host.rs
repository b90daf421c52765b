//! Server host: wires repository, service and gRPC adapter onto a listener.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::{Routes, RoutesBuilder};

use consignment_sdk::{FILE_DESCRIPTOR_SET, SERVICE_NAME, ShippingServiceServer};
use shippy_bootstrap::AppConfig;
use shippy_transport_grpc::server::{bind_tcp, serve_tcp};

use crate::api::grpc::ShippingServiceImpl;
use crate::domain::ConsignmentService;
use crate::infra::InMemoryConsignmentRepository;

/// Build the tonic routes exposing `service` plus gRPC server reflection.
///
/// # Errors
/// Returns an error if the embedded descriptor set cannot be decoded.
pub fn build_routes(service: Arc<ConsignmentService>, shutdown: CancellationToken) -> Result<Routes> {
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()
        .context("failed to build reflection service")?;

    let mut routes = RoutesBuilder::default();
    routes
        .add_service(ShippingServiceServer::new(ShippingServiceImpl::new(
            service, shutdown,
        )))
        .add_service(reflection);
    Ok(routes.routes())
}

/// Bind `config.server.listen_addr` and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run_server(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let listener = bind_tcp(&config.server.listen_addr).await?;
    serve_with_listener(listener, cancel).await
}

/// Serve a fresh, empty in-memory store on a pre-bound listener.
///
/// # Errors
/// Returns an error if the server fails while running.
pub async fn serve_with_listener(listener: TcpListener, cancel: CancellationToken) -> Result<()> {
    let repo = Arc::new(InMemoryConsignmentRepository::new());
    let service = Arc::new(ConsignmentService::new(repo));

    tracing::info!(service = SERVICE_NAME, "consignment service initialized");
    let routes = build_routes(service, cancel.clone())?;
    serve_tcp(listener, routes, cancel).await
}
