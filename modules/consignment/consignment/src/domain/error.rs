//! Domain error types for the consignment module.

use thiserror::Error;

/// Domain-level errors for the consignment module.
///
/// The in-memory repository never produces these; they exist so that a
/// fallible backing store can be plugged in without changing the service.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The backing store could not accept or return records.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates a `StorageUnavailable` error.
    #[must_use]
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable(message.into())
    }
}
