//! Consignment API trait and types
//!
//! Contract trait and error type for the consignment service.

use async_trait::async_trait;
use shippy_transport_grpc::CallContext;

use crate::proto::{Consignment, Response};

/// Consignment API trait
///
/// Create a consignment and list every consignment stored so far.
#[async_trait]
pub trait ConsignmentClientV1: Send + Sync {
    /// Store a consignment; the response echoes it with `created = true`.
    async fn create_consignment(
        &self,
        ctx: &CallContext,
        consignment: Consignment,
    ) -> Result<Response, ConsignmentError>;

    /// Every stored consignment, in insertion order.
    async fn list_consignments(&self, ctx: &CallContext) -> Result<Vec<Consignment>, ConsignmentError>;
}

/// Error type for Consignment operations
#[derive(thiserror::Error, Debug)]
pub enum ConsignmentError {
    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tonic::Status> for ConsignmentError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_owned();
        match status.code() {
            tonic::Code::Unavailable | tonic::Code::DeadlineExceeded | tonic::Code::Cancelled => {
                Self::Transport(message)
            }
            tonic::Code::InvalidArgument => Self::InvalidInput(message),
            _ => Self::Internal(message),
        }
    }
}
