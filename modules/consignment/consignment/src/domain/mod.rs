//! Domain layer for the consignment module
//!
//! Contains the repository capability, the service built on it, and domain errors.

pub mod error;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use repo::ConsignmentRepository;
pub use service::ConsignmentService;
