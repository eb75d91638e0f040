//! Background eviction of expired cache entries
//!
//! The reaper wakes on a fixed interval and removes every entry whose age
//! exceeds that interval. It is the only place staleness is enforced; the
//! cache's `get` never checks timestamps.

use std::time::Duration;

use tokio::sync::mpsc;

use super::Cache;

/// Handle for a running reaper task.
///
/// Spawned once at startup with the cache it sweeps. The task runs until the
/// process exits or [`stop`](Reaper::stop) is called; stopping guarantees no
/// further evictions happen, which tests rely on.
pub struct Reaper {
    shutdown_tx: mpsc::Sender<()>,
}

impl Reaper {
    /// Spawns a background task that sweeps `cache` every `interval`,
    /// deleting entries older than `interval`.
    pub fn spawn(cache: Cache, interval: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // Skip the first tick (immediate)
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        cache.reap(interval);
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self { shutdown_tx }
    }

    /// Signals the background task to stop sweeping.
    ///
    /// Entries already in the cache stay there after this returns; only the
    /// periodic eviction halts.
    pub async fn stop(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}
