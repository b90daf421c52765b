//! Domain service for the consignment module.

use std::sync::Arc;

use consignment_sdk::{Consignment, GetRequest, Response};
use shippy_transport_grpc::CallContext;
use tracing::debug;

use super::error::DomainError;
use super::repo::ConsignmentRepository;

/// Domain service for consignment operations.
///
/// Holds no state of its own; every call is a single transaction against the
/// shared repository, so one instance is shared by all in-flight calls.
pub struct ConsignmentService {
    repo: Arc<dyn ConsignmentRepository>,
}

impl ConsignmentService {
    /// Creates a new `ConsignmentService` with the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn ConsignmentRepository>) -> Self {
        Self { repo }
    }

    /// Stores a consignment and echoes it back with `created = true`.
    ///
    /// The call context is not forwarded to the repository.
    ///
    /// # Errors
    ///
    /// Propagates any repository error unchanged.
    pub fn create_consignment(
        &self,
        ctx: &CallContext,
        req: Consignment,
    ) -> Result<Response, DomainError> {
        let remaining_ms = ctx.remaining().map(|d| d.as_millis());
        debug!(
            description = %req.description,
            destination = %req.destination,
            weight = req.weight,
            ?remaining_ms,
            "creating consignment"
        );

        let consignment = self.repo.create(req)?;

        Ok(Response {
            created: true,
            consignment: Some(consignment),
            consignments: Vec::new(),
        })
    }

    /// Returns every stored consignment. Never fails.
    #[must_use]
    pub fn list_consignments(&self, ctx: &CallContext, _req: GetRequest) -> Response {
        let consignments = self.repo.get_all();
        debug!(
            count = consignments.len(),
            cancelled = ctx.is_cancelled(),
            "listing consignments"
        );

        Response {
            created: false,
            consignment: None,
            consignments,
        }
    }
}
