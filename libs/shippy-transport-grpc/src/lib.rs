#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
//! gRPC transport helpers shared by the Shippy services and their clients.
//!
//! - [`client`] opens tonic channels and stamps per-call deadlines
//! - [`server`] binds a TCP listener and runs a tonic server until cancelled
//! - [`call_context`] turns request metadata into a per-call [`CallContext`]

pub mod call_context;
pub mod client;
pub mod server;

pub use call_context::{CallContext, CallContextError, GRPC_TIMEOUT_HEADER, extract_call_ctx};
