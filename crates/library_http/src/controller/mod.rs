//! Route table and the controllers behind it.

pub mod book_controller;
pub mod writer_controller;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(book_controller::routes())
        .merge(writer_controller::routes())
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({
        "ok": library_core::ping() == "pong",
        "version": library_core::core_version(),
    }))
}
