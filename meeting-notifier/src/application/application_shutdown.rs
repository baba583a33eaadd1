use super::ApplicationState;

pub async fn close(state: ApplicationState) {
    tracing::info!("closing meetings watcher");
    state.meetings_watcher_service.close().await;

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

///
/// Resolves on Ctrl+C or SIGTERM.
/// A signal that can't be listened to is logged and never resolves
///
pub async fn shutdown_signal() {
    let signal = tokio::select! {
        _ = ctrl_c() => "SIGINT",
        _ = terminate() => "SIGTERM",
    };

    tracing::info!(signal, "starting shutdown");
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(err) => {
            tracing::error!(%err, "failed to listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
