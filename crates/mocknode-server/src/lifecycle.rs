//! Process lifecycle: startup banner, serving until shutdown, signals.

use std::fmt::Write;
use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use mocknode_core::error::Result;

/// Printed after the server has drained.
pub const SHUTDOWN_LINE: &str = "Shutting down mock node...";

/// Banner printed once the listener is bound.
pub fn banner(addr: SocketAddr) -> String {
    let port = addr.port();
    let mut out = String::new();
    let _ = writeln!(out, "Starting mock node with Prometheus metrics on port {port}");
    let _ = writeln!(out, "Endpoints:");
    let _ = writeln!(out, "  Health: http://localhost:{port}/health");
    let _ = writeln!(out, "  Status: http://localhost:{port}/status");
    let _ = writeln!(out, "  Metrics: http://localhost:{port}/metrics");
    let _ = writeln!(out, "Mock node serving at {addr}");
    out
}

/// Serve `app` until `shutdown` resolves, then let in-flight requests finish.
pub async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
