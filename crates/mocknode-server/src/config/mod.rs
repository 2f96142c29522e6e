//! Server config loader (strict parsing).
//!
//! The config file is optional; without one the server runs on built-in
//! defaults (`0.0.0.0:26660`, access log to stdout).

pub mod schema;

use std::fs;
use std::path::Path;

use mocknode_core::error::{MockNodeError, Result};

pub use schema::{AccessLogMode, ServerConfig, ServerSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MockNodeError::BadConfig(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| MockNodeError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` when given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&str>) -> Result<ServerConfig> {
    match path {
        Some(p) => load_from_file(p),
        None => Ok(ServerConfig::default()),
    }
}
