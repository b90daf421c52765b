//! gRPC client implementation of `ConsignmentClientV1`

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use shippy_transport_grpc::CallContext;
use shippy_transport_grpc::client::{ChannelConfig, open_channel, outbound_request};
use tonic::transport::Channel;

use crate::api::{ConsignmentClientV1, ConsignmentError};
use crate::proto::shipping_service_client::ShippingServiceClient;
use crate::proto::{Consignment, GetRequest, Response};

/// gRPC client implementation of `ConsignmentClientV1`
#[derive(Clone)]
pub struct ConsignmentGrpcClient {
    inner: ShippingServiceClient<Channel>,
    call_timeout: Duration,
}

impl ConsignmentGrpcClient {
    /// Connect to the `ShippingService` with default channel settings.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the server cannot be reached.
    pub async fn connect(uri: impl Into<String>) -> Result<Self> {
        Self::connect_with_config(uri, &ChannelConfig::default()).await
    }

    /// Connect with explicit timeouts. A single attempt is made.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the server cannot be reached.
    pub async fn connect_with_config(uri: impl Into<String>, cfg: &ChannelConfig) -> Result<Self> {
        let channel = open_channel(&uri.into(), cfg).await?;
        Ok(Self {
            inner: ShippingServiceClient::new(channel),
            call_timeout: cfg.call_timeout,
        })
    }
}

#[async_trait]
impl ConsignmentClientV1 for ConsignmentGrpcClient {
    async fn create_consignment(
        &self,
        ctx: &CallContext,
        consignment: Consignment,
    ) -> Result<Response, ConsignmentError> {
        tracing::debug!(
            description = %consignment.description,
            containers = consignment.containers.len(),
            "CreateConsignment"
        );
        let mut client = self.inner.clone();
        let response = client
            .create_consignment(outbound_request(ctx, self.call_timeout, consignment))
            .await?;
        Ok(response.into_inner())
    }

    async fn list_consignments(&self, ctx: &CallContext) -> Result<Vec<Consignment>, ConsignmentError> {
        let mut client = self.inner.clone();
        let response = client
            .get_consignments(outbound_request(ctx, self.call_timeout, GetRequest {}))
            .await?;
        let consignments = response.into_inner().consignments;
        tracing::debug!(count = consignments.len(), "GetConsignments");
        Ok(consignments)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use shippy_transport_grpc::client::ConnectError;

    #[tokio::test]
    async fn test_connect_invalid_uri_fails() {
        let err = ConsignmentGrpcClient::connect("not a uri").await.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConnectError>(),
            Some(ConnectError::InvalidUri { .. })
        ));
    }
}
