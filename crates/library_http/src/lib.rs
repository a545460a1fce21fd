//! HTTP adapter for the library catalog.
//!
//! # Routes
//! - `GET /health`
//! - `GET|POST|PUT /books`, `GET|DELETE /books/:id`, `GET /books/search`
//! - `GET|POST|PUT /writers`, `GET|DELETE /writers/:id`, `GET /writers/search`
//!
//! Controllers stay thin: parse the request, call one service method, map the
//! outcome to a status code.

pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod state;

use axum::Router;
use std::net::SocketAddr;

pub use state::AppState;

/// Builds the full application router over `state`.
pub fn router(state: AppState) -> Router {
    controller::routes().with_state(state)
}

/// Serves the router on `addr` until ctrl-c.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "event=server_start module=http status=ok address={}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("event=server_stop module=http status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=shutdown_signal module=http status=error error={err}");
    }
}
