//! Signal handling for interrupting a running countdown

use signal_hook_tokio::Signals;
use futures::stream::{Stream, StreamExt};
use tracing::{info, warn};

/// Wait for an interrupt signal (SIGTERM, SIGINT).
///
/// If the handler cannot be installed the future never resolves, so the
/// countdown keeps running and only the kill marker can stop it.
pub async fn shutdown_signal() {
    let signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to install signal handler: {}", e);
            return futures::future::pending().await;
        }
    };

    first_signal(signals).await
}

/// Resolve on the first delivered signal. A stream that ends without one
/// never resolves.
async fn first_signal<S>(mut signals: S)
where
    S: Stream<Item = i32> + Unpin,
{
    match signals.next().await {
        Some(signal) => info!("Received signal: {}", signal),
        None => {
            warn!("Signal stream ended, interrupts are no longer observed");
            futures::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_ended_stream_never_resolves() {
        let waited = tokio::time::timeout(
            Duration::from_secs(3600),
            first_signal(futures::stream::empty::<i32>()),
        )
        .await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_on_first_signal() {
        let waited = tokio::time::timeout(
            Duration::from_secs(1),
            first_signal(futures::stream::iter([signal_hook::consts::SIGTERM])),
        )
        .await;
        assert!(waited.is_ok());
    }
}
