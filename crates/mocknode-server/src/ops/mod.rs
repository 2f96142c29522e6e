//! Mock node HTTP endpoints.
//!
//! - `/health`  : fixed liveness JSON
//! - `/status`  : fixed Tendermint status document
//! - `/metrics` : Prometheus text, re-sampled per request
//!
//! Any method other than GET is `501` on every path, HEAD included, before
//! path dispatch; unknown GET paths are `404 Not Found`.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use mocknode_core::node::{metrics::render_metrics, HEALTH_BODY};

use crate::app_state::AppState;

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";
const TEXT_HTML: &str = "text/html;charset=utf-8";

pub async fn health() -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, APPLICATION_JSON)], HEALTH_BODY).into_response()
}

pub async fn status(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, APPLICATION_JSON)],
        state.status_body().to_owned(),
    )
        .into_response()
}

pub async fn metrics() -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, TEXT_PLAIN)], sample_metrics()).into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Body::from("Not Found")).into_response()
}

/// Only GET is served; everything else is refused ahead of routing.
pub async fn require_get(req: Request, next: Next) -> Response {
    if req.method() == Method::GET {
        return next.run(req).await;
    }
    unsupported_method(req.method())
}

fn unsupported_method(method: &Method) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        [(CONTENT_TYPE, TEXT_HTML)],
        error_page(StatusCode::NOT_IMPLEMENTED, &format!("Unsupported method ('{method}')")),
    )
        .into_response()
}

/// Plain HTML error document, the same shape stock HTTP servers send.
fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let explain = if status == StatusCode::NOT_IMPLEMENTED {
        "Server does not support this operation"
    } else {
        status.canonical_reason().unwrap_or("Unknown")
    };
    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         \x20   <head>\n\
         \x20       <meta charset=\"utf-8\">\n\
         \x20       <title>Error response</title>\n\
         \x20   </head>\n\
         \x20   <body>\n\
         \x20       <h1>Error response</h1>\n\
         \x20       <p>Error code: {code}</p>\n\
         \x20       <p>Message: {message}.</p>\n\
         \x20       <p>Error code explanation: {code} - {explain}.</p>\n\
         \x20   </body>\n\
         </html>\n",
        message = escape_html(message),
    )
}

fn escape_html(v: &str) -> String {
    v.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

// Kept synchronous so the thread-local rng never lives across an await.
fn sample_metrics() -> String {
    render_metrics(unix_now(), &mut rand::thread_rng())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
