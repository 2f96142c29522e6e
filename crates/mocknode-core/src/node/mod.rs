//! Canned node documents.
//!
//! - `health`  : fixed liveness body
//! - `status`  : Tendermint-style `/status` JSON-RPC envelope
//! - `metrics` : per-request Prometheus snapshot

pub mod health;
pub mod metrics;
pub mod status;

pub use health::HEALTH_BODY;
pub use metrics::MetricsSnapshot;
pub use status::NodeStatus;

/// Block height every canned document reports.
pub const BASE_HEIGHT: u64 = 12345;
