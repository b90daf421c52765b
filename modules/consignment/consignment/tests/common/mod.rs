#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for consignment integration tests

use consignment_sdk::{Consignment, ConsignmentGrpcClient};
use shippy_transport_grpc::server::bind_tcp;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub uri: String,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = bind_tcp("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(consignment::serve_with_listener(listener, cancel.clone()));

        Self {
            uri: format!("http://{addr}"),
            cancel,
            handle,
        }
    }

    pub async fn client(&self) -> ConsignmentGrpcClient {
        ConsignmentGrpcClient::connect(self.uri.clone()).await.unwrap()
    }

    pub async fn shutdown(self) {
        self.cancel.cancel();
        self.handle.await.unwrap().unwrap();
    }
}

/// A consignment whose fields all derive from `i`, so a torn record is detectable.
pub fn numbered(i: i32) -> Consignment {
    Consignment {
        id: format!("c-{i}"),
        description: format!("crate {i}"),
        weight: i,
        destination: format!("port-{i}"),
        ..Default::default()
    }
}

/// True when every field still agrees with the record's weight.
pub fn is_whole(c: &Consignment) -> bool {
    c.id == format!("c-{}", c.weight)
        && c.description == format!("crate {}", c.weight)
        && c.destination == format!("port-{}", c.weight)
}
