//! Shared application state for the mock node server.
//!
//! Holds only immutable data: the pre-rendered `/status` body and the
//! access-log sink.

use std::sync::Arc;

use mocknode_core::error::Result;
use mocknode_core::node::NodeStatus;

use crate::config::ServerConfig;
use crate::obs::{access_log, AccessLog};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    status_body: String,
    access_log: Arc<dyn AccessLog>,
}

impl AppState {
    /// Build state with the access-log sink chosen in `cfg`.
    pub fn new(cfg: &ServerConfig) -> Result<Self> {
        Self::with_access_log(access_log::from_mode(cfg.server.access_log))
    }

    /// Build state with an explicit sink (tests capture or silence it here).
    pub fn with_access_log(access_log: Arc<dyn AccessLog>) -> Result<Self> {
        // The status document never changes, so encode it once.
        let status_body = NodeStatus::mock().to_json()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                status_body,
                access_log,
            }),
        })
    }

    pub fn status_body(&self) -> &str {
        &self.inner.status_body
    }

    pub fn access_log(&self) -> &dyn AccessLog {
        self.inner.access_log.as_ref()
    }
}
