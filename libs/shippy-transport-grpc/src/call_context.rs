//! Per-call context carried from the gRPC layer into domain services.
//!
//! A [`CallContext`] holds the caller's deadline (from the `grpc-timeout`
//! request header) and a cancellation token. Domain code receives it by
//! reference on every operation; storage layers never see it.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tonic::metadata::MetadataMap;

/// Standard gRPC header carrying the client's timeout.
pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// The wire format allows at most eight digits before the unit.
const MAX_TIMEOUT_DIGITS: usize = 8;

/// Errors produced while decoding the `grpc-timeout` header.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CallContextError {
    #[error("grpc-timeout header is not valid ASCII")]
    NotAscii,

    #[error("malformed grpc-timeout value '{0}'")]
    Malformed(String),

    #[error("unknown grpc-timeout unit '{0}'")]
    UnknownUnit(char),
}

/// Deadline and cancellation carrier for one remote call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl CallContext {
    /// Context with no deadline and a fresh cancellation token.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token, e.g. with a child of the server's root token.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline; `None` when the call has no deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

/// Decode a `grpc-timeout` value such as `"250m"` or `"5S"`.
///
/// # Errors
/// Returns [`CallContextError`] if the value is empty, too long, not numeric,
/// or uses an unknown unit.
pub fn parse_grpc_timeout(raw: &str) -> Result<Duration, CallContextError> {
    let mut chars = raw.chars();
    let Some(unit) = chars.next_back() else {
        return Err(CallContextError::Malformed(raw.to_owned()));
    };
    let digits = chars.as_str();

    if digits.is_empty()
        || digits.len() > MAX_TIMEOUT_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(CallContextError::Malformed(raw.to_owned()));
    }

    let value: u64 = digits
        .parse()
        .map_err(|_| CallContextError::Malformed(raw.to_owned()))?;

    let timeout = match unit {
        'H' => Duration::from_secs(value.saturating_mul(3600)),
        'M' => Duration::from_secs(value.saturating_mul(60)),
        'S' => Duration::from_secs(value),
        'm' => Duration::from_millis(value),
        'u' => Duration::from_micros(value),
        'n' => Duration::from_nanos(value),
        other => return Err(CallContextError::UnknownUnit(other)),
    };

    Ok(timeout)
}

/// Build a [`CallContext`] from gRPC request metadata.
///
/// An absent or undecodable `grpc-timeout` header yields a context without
/// a deadline; the call itself is never rejected over it.
#[must_use]
pub fn extract_call_ctx(meta: &MetadataMap) -> CallContext {
    let Some(raw) = meta.get(GRPC_TIMEOUT_HEADER) else {
        return CallContext::background();
    };

    let parsed = raw
        .to_str()
        .map_err(|_| CallContextError::NotAscii)
        .and_then(parse_grpc_timeout);

    match parsed {
        Ok(timeout) => CallContext::with_timeout(timeout),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring grpc-timeout header");
            CallContext::background()
        }
    }
}
