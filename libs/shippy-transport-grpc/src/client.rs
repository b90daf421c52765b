//! Outbound channel setup for Shippy clients.
//!
//! A client opens one [`Channel`] per process with [`open_channel`]. There is
//! exactly one connect attempt: an unreachable server is reported to the
//! caller, which exits. Every call then carries a deadline built by
//! [`outbound_request`], the tighter of the caller's [`CallContext`] and the
//! configured call timeout.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use crate::call_context::CallContext;

/// Settings for one outbound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Upper bound on TCP connect + HTTP/2 handshake.
    pub connect_timeout: Duration,
    /// Upper bound on any single call made over the channel.
    pub call_timeout: Duration,
    /// Interval for HTTP/2 keepalive pings; `None` disables them.
    pub keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            call_timeout: Duration::from_secs(30),
            keepalive: Some(Duration::from_secs(30)),
        }
    }
}

impl ChannelConfig {
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    #[must_use]
    pub fn without_keepalive(mut self) -> Self {
        self.keepalive = None;
        self
    }

    fn endpoint(&self, uri: &str) -> Result<Endpoint, ConnectError> {
        let mut endpoint = Endpoint::from_shared(uri.to_owned())
            .map_err(|source| ConnectError::InvalidUri {
                uri: uri.to_owned(),
                source,
            })?
            .connect_timeout(self.connect_timeout)
            .timeout(self.call_timeout);

        if let Some(interval) = self.keepalive {
            endpoint = endpoint
                .tcp_keepalive(Some(interval))
                .http2_keep_alive_interval(interval)
                .keep_alive_while_idle(true);
        }
        Ok(endpoint)
    }
}

/// Failure to obtain a channel.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid server uri '{uri}'")]
    InvalidUri {
        uri: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("could not reach {uri} within {}ms", timeout.as_millis())]
    Unreachable {
        uri: String,
        timeout: Duration,
        #[source]
        source: tonic::transport::Error,
    },
}

/// Open a channel to `uri` with a single connect attempt.
///
/// # Errors
/// Returns [`ConnectError::InvalidUri`] if `uri` does not parse, or
/// [`ConnectError::Unreachable`] if the server does not answer within
/// `connect_timeout`.
pub async fn open_channel(uri: &str, cfg: &ChannelConfig) -> Result<Channel, ConnectError> {
    let endpoint = cfg.endpoint(uri)?;

    match endpoint.connect().await {
        Ok(channel) => {
            tracing::debug!(
                %uri,
                call_timeout_ms = u64::try_from(cfg.call_timeout.as_millis()).unwrap_or(u64::MAX),
                "gRPC channel open"
            );
            Ok(channel)
        }
        Err(source) => {
            tracing::warn!(%uri, error = %source, "gRPC connect failed");
            Err(ConnectError::Unreachable {
                uri: uri.to_owned(),
                timeout: cfg.connect_timeout,
                source,
            })
        }
    }
}

/// Effective timeout for one call: the caller's remaining time, capped by `limit`.
#[must_use]
pub fn call_timeout(ctx: &CallContext, limit: Duration) -> Duration {
    ctx.remaining().map_or(limit, |remaining| remaining.min(limit))
}

/// Wrap `message` in a request whose `grpc-timeout` is [`call_timeout`].
#[must_use]
pub fn outbound_request<T>(ctx: &CallContext, limit: Duration, message: T) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request.set_timeout(call_timeout(ctx, limit));
    request
}
