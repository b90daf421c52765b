use std::future::Future;

use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Signals that can trigger shutdown.
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
///
/// # Errors
/// Returns an error if signal handling fails.
pub async fn wait_for_shutdown() -> Result<()> {
    let signal = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    let name = match signal {
        ShutdownSignal::CtrlC => "SIGINT",
        #[cfg(unix)]
        ShutdownSignal::Sigterm => "SIGTERM",
    };
    tracing::info!(signal = name, "Shutdown signal received, initiating graceful shutdown");
    Ok(())
}

/// Root cancellation token that fires on the first shutdown signal.
#[must_use]
pub fn shutdown_token() -> CancellationToken {
    cancel_when(wait_for_shutdown(), signal::ctrl_c())
}

/// Cancel the returned token once `waiter` finishes. If `waiter` fails,
/// `fallback` is awaited instead; if that fails too the token fires at once.
fn cancel_when<W, F>(waiter: W, fallback: F) -> CancellationToken
where
    W: Future<Output = Result<()>> + Send + 'static,
    F: Future<Output = std::io::Result<()>> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let cancel_for_signals = cancel.clone();
    let task = async move {
        if let Err(e) = waiter.await {
            tracing::warn!(error = %e, "shutdown: signal waiter failed, falling back to ctrl_c()");
            if let Err(e) = fallback.await {
                tracing::warn!(error = %e, "shutdown: ctrl_c() fallback failed, cancelling now");
            }
        }
        cancel_for_signals.cancel();
    };
    tokio::spawn(task.in_current_span());
    cancel
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await.map_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        e
    })?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut signal_handler =
        signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            e
        })?;
    signal_handler.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tracing_test::traced_test;

    async fn fired(token: &CancellationToken) -> bool {
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .is_ok()
    }

    #[tokio::test]
    async fn test_token_fires_when_waiter_returns() {
        let token = cancel_when(async { Ok(()) }, std::future::pending());
        assert!(fired(&token).await);
    }

    #[tokio::test]
    async fn test_token_waits_for_waiter() {
        let token = cancel_when(std::future::pending(), std::future::pending());
        assert!(!fired(&token).await);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_fallback_is_logged_and_still_cancels() {
        let token = cancel_when(
            async { Err(anyhow::anyhow!("no signal handler")) },
            async { Err(std::io::Error::other("ctrl_c unavailable")) },
        );

        assert!(fired(&token).await);
        assert!(logs_contain("signal waiter failed"));
        assert!(logs_contain("ctrl_c() fallback failed"));
        assert!(logs_contain("ctrl_c unavailable"));
    }
}
