//! Infrastructure layer: concrete storage backends.

pub mod storage;

pub use storage::InMemoryConsignmentRepository;
