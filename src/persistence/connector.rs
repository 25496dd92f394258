//! Startup database connector with bounded retry.

use std::fmt::Display;
use std::future::Future;

use mongodb::{bson::doc, Client};
use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::persistence::backoff::{retry_delay, BASE_DELAY_MS, MAX_DELAY_MS};

/// Terminal result of the connector loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The database answered a probe.
    Connected,
    /// Every allowed attempt failed; the process should exit non-zero.
    Exhausted,
    /// Shutdown was requested while a retry was pending.
    Cancelled,
}

/// Owns the connection-attempt counter and the retry schedule.
///
/// Runs once at startup, outside the request path. Per-request write
/// failures are the handler's problem and are never retried here.
pub struct Connector {
    max_retries: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
    attempts: u32,
}

impl Connector {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay_ms: BASE_DELAY_MS,
            max_delay_ms: MAX_DELAY_MS,
            attempts: 0,
        }
    }

    /// Override the delay schedule. Used by tests to avoid multi-second
    /// sleeps.
    pub fn with_delays(mut self, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        self.base_delay_ms = base_delay_ms;
        self.max_delay_ms = max_delay_ms;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Probe MongoDB until it answers, retries are exhausted, or shutdown
    /// is requested.
    pub async fn run(
        &mut self,
        client: &Client,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> ConnectOutcome {
        self.run_with(
            || async {
                client
                    .database("admin")
                    .run_command(doc! { "ping": 1 })
                    .await
                    .map(|_| ())
            },
            shutdown,
        )
        .await
    }

    /// Drive the retry loop with an arbitrary probe.
    ///
    /// Counter transitions: increment on failure, reset to zero on success.
    /// The sleep between attempts races against the shutdown signal so no
    /// timer outlives the process.
    pub async fn run_with<F, Fut, E>(
        &mut self,
        mut probe: F,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> ConnectOutcome
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        loop {
            match probe().await {
                Ok(()) => {
                    self.attempts = 0;
                    tracing::info!("Database connection established");
                    return ConnectOutcome::Connected;
                }
                Err(e) => {
                    self.attempts += 1;
                    if self.attempts >= self.max_retries {
                        tracing::error!(
                            attempts = self.attempts,
                            error = %e,
                            "Database unreachable, giving up"
                        );
                        return ConnectOutcome::Exhausted;
                    }

                    let delay = retry_delay(self.attempts, self.base_delay_ms, self.max_delay_ms);
                    tracing::warn!(
                        attempt = self.attempts,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %e,
                        "Database connection failed, retrying"
                    );

                    tokio::select! {
                        _ = sleep(delay) => {}
                        _ = shutdown.recv() => {
                            tracing::info!("Shutdown requested, abandoning connection retry");
                            return ConnectOutcome::Cancelled;
                        }
                    }
                }
            }
        }
    }
}
