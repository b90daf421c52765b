//! Consignment Module
//!
//! Stores cargo consignments in memory and serves them over gRPC.
//!
//! ## Architecture
//!
//! - `domain/repo.rs` - Storage capability (`ConsignmentRepository`)
//! - `domain/service.rs` - Core business logic
//! - `infra/storage/in_memory_repo.rs` - Lock-guarded in-memory store
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `host.rs` - Listener binding and server lifecycle
//!
//! External consumers should use the `consignment-sdk` crate which provides
//! the gRPC client and proto types.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod domain;
pub mod host;
pub mod infra;

pub use host::{run_server, serve_with_listener};
