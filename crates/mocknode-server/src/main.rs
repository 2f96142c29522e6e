//! mocknode server
//!
//! Serves canned `/health`, `/status` and `/metrics` documents of a
//! Tendermint/Axelar node on port 26660 (override with a YAML config given as
//! the first argument).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use mocknode_core::error::Result;
use mocknode_server::{app_state::AppState, config, lifecycle, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "mocknode-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config_path = std::env::args().nth(1);
    let cfg = config::load_or_default(config_path.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "mocknode-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;
    let local = listener.local_addr()?;
    print!("{}", lifecycle::banner(local));

    lifecycle::serve_until(listener, app, lifecycle::shutdown_signal()).await?;

    println!("{}", lifecycle::SHUTDOWN_LINE);
    Ok(())
}
