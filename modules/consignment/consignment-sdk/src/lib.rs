//! Consignment SDK
//!
//! This crate provides everything needed to consume or host the consignment service:
//! - API trait (`ConsignmentClientV1`)
//! - Error types (`ConsignmentError`)
//! - gRPC client (`ConsignmentGrpcClient`)
//! - Proto stubs for server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use consignment_sdk::{ConsignmentClientV1, ConsignmentGrpcClient, Consignment};
//!
//! let client = ConsignmentGrpcClient::connect("http://localhost:50051").await?;
//! let response = client.create_consignment(&ctx, consignment).await?;
//! assert!(response.created);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{ConsignmentClientV1, ConsignmentError};

// === GRPC CLIENT ===
mod client;
pub use client::ConsignmentGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for ShippingService
#[allow(clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("shippy.consignment.v1");

    /// Encoded `FileDescriptorSet` for the consignment protos, served via reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("consignment_descriptor");
}

// Re-export proto types needed by server and clients
pub use proto::shipping_service_client::ShippingServiceClient;
pub use proto::shipping_service_server::{ShippingService, ShippingServiceServer};
pub use proto::{Consignment, Container, FILE_DESCRIPTOR_SET, GetRequest, Response};

/// Fully-qualified gRPC service name (used in logs and client config)
pub const SERVICE_NAME: &str = "shippy.consignment.v1.ShippingService";
