use std::future::{Future, pending};
use std::io;

/// Resolves once the process is asked to stop (SIGINT or SIGTERM).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<(), io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = pending::<io::Result<()>>();

    let signal = first_signal(tokio::signal::ctrl_c(), terminate).await;
    tracing::info!(signal, "shutdown requested, draining connections");
}

async fn first_signal(
    interrupt: impl Future<Output = io::Result<()>>,
    terminate: impl Future<Output = io::Result<()>>,
) -> &'static str {
    tokio::select! {
        name = listen("SIGINT", interrupt) => name,
        name = listen("SIGTERM", terminate) => name,
    }
}

/// A listener that cannot be installed never fires, so the server keeps running.
async fn listen(name: &'static str, signal: impl Future<Output = io::Result<()>>) -> &'static str {
    match signal.await {
        Ok(()) => name,
        Err(err) => {
            tracing::error!(signal = name, error = %err, "cannot listen for shutdown signal");
            pending().await
        }
    }
}
