//! gRPC adapter for the consignment service.

mod error;
mod server;

pub use error::domain_error_to_status;
pub use server::ShippingServiceImpl;
