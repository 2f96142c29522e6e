//! Axum router wiring.
//!
//! Layer order (outermost first): access log, GET-only gate, routes.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/status", get(ops::status))
        .route("/metrics", get(ops::metrics))
        .fallback(ops::not_found)
        .layer(middleware::from_fn(ops::require_get))
        .layer(middleware::from_fn_with_state(state.clone(), obs::access_log_layer))
        .with_state(state)
}
