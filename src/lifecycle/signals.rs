//! Termination signal handling.

/// Wait for any termination signal (SIGINT, SIGTERM or SIGHUP).
///
/// All three trigger the same graceful shutdown; there is no reload path.
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");
    let mut terminate = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut hangup = signal(SignalKind::hangup()).expect("Failed to install SIGHUP handler");

    tokio::select! {
        _ = interrupt.recv() => tracing::info!("SIGINT received"),
        _ = terminate.recv() => tracing::info!("SIGTERM received"),
        _ = hangup.recv() => tracing::info!("SIGHUP received"),
    }
}

#[cfg(not(unix))]
pub async fn wait_for_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Ctrl+C received");
}
