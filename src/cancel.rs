use log::{debug, warn};
use tokio_util::sync::CancellationToken;

/// 中断提示，用户名取自 `$USER`
pub fn cancellation_message() -> String {
    let username = std::env::var("USER").unwrap_or_else(|_| "user".to_string());
    format!("\nProcess canceled by {}.", username)
}

/// 监听 Ctrl-C 和 SIGTERM，收到后取消 token
pub fn install_signal_handlers(token: CancellationToken) {
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        debug!("shutdown signal received");
        token.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("cannot listen for SIGTERM: {}", e);
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
            return;
        }
    };

    tokio::select! {
        Ok(()) = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
