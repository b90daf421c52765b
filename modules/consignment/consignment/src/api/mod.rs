//! Transport adapters exposing the domain service.

pub mod grpc;
