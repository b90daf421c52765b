//! Mapping from domain errors to gRPC status codes.

use tonic::Status;

use crate::domain::DomainError;

/// Convert a [`DomainError`] into the `Status` returned to the caller.
#[must_use]
pub fn domain_error_to_status(err: &DomainError) -> Status {
    match err {
        DomainError::StorageUnavailable(msg) => Status::unavailable(msg.clone()),
        DomainError::Internal(e) => Status::internal(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_storage_unavailable_maps_to_unavailable() {
        let status = domain_error_to_status(&DomainError::storage_unavailable("offline"));
        assert_eq!(status.code(), Code::Unavailable);
        assert_eq!(status.message(), "offline");
    }

    #[test]
    fn test_internal_maps_to_internal() {
        let status = domain_error_to_status(&DomainError::Internal(anyhow::anyhow!("bug")));
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "bug");
    }
}
