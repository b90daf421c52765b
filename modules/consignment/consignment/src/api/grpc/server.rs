//! gRPC Server implementation for consignments
//!
//! The server implementation handles gRPC requests and delegates
//! to the domain service for business logic.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status};

use consignment_sdk::{
    Consignment, GetRequest, Response as ConsignmentResponse, ShippingService,
};
use shippy_transport_grpc::extract_call_ctx;

use super::error::domain_error_to_status;
use crate::domain::ConsignmentService;

/// gRPC service implementation that wraps the domain service.
#[derive(Clone)]
pub struct ShippingServiceImpl {
    service: Arc<ConsignmentService>,
    shutdown: CancellationToken,
}

impl ShippingServiceImpl {
    /// Create a new `ShippingService` implementation with the given domain service.
    ///
    /// Per-call contexts are cancelled when `shutdown` fires.
    #[must_use]
    pub fn new(service: Arc<ConsignmentService>, shutdown: CancellationToken) -> Self {
        Self { service, shutdown }
    }
}

#[tonic::async_trait]
impl ShippingService for ShippingServiceImpl {
    async fn create_consignment(
        &self,
        request: Request<Consignment>,
    ) -> Result<Response<ConsignmentResponse>, Status> {
        let ctx = extract_call_ctx(request.metadata())
            .with_cancellation(self.shutdown.child_token());
        let req = request.into_inner();

        let response = self.service.create_consignment(&ctx, req).map_err(|e| {
            tracing::error!(error = %e, "create_consignment failed");
            domain_error_to_status(&e)
        })?;

        Ok(Response::new(response))
    }

    async fn get_consignments(
        &self,
        request: Request<GetRequest>,
    ) -> Result<Response<ConsignmentResponse>, Status> {
        let ctx = extract_call_ctx(request.metadata())
            .with_cancellation(self.shutdown.child_token());
        let req = request.into_inner();

        Ok(Response::new(self.service.list_consignments(&ctx, req)))
    }
}
