//! Request observability.
//!
//! Every request passes through `access_log_layer`, which hands one
//! `AccessEntry` to the sink configured in `AppState`. Sinks never touch the
//! response.

pub mod access_log;

use axum::{extract::{Request, State}, middleware::Next, response::Response};
use chrono::Local;

use crate::app_state::AppState;

pub use access_log::{AccessEntry, AccessLog, NullAccessLog, TracingAccessLog, WriterAccessLog};

pub async fn access_log_layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let version = req.version();

    let resp = next.run(req).await;

    state.access_log().record(&AccessEntry {
        at: Local::now(),
        method,
        target,
        version,
        status: resp.status(),
    });
    resp
}
