//! Repository trait for consignment storage.

use consignment_sdk::Consignment;

use super::error::DomainError;

/// Storage capability used by [`ConsignmentService`](super::ConsignmentService).
///
/// Implementations must be safe to call from many tasks at once: each
/// `create` is an atomic append and `get_all` never observes a partial one.
pub trait ConsignmentRepository: Send + Sync {
    /// Appends `consignment` and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the backing store rejects the write.
    fn create(&self, consignment: Consignment) -> Result<Consignment, DomainError>;

    /// Snapshot of every stored consignment in insertion order.
    fn get_all(&self) -> Vec<Consignment>;
}
