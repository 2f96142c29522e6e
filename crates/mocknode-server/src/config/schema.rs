use std::net::SocketAddr;

use serde::Deserialize;
use mocknode_core::error::{MockNodeError, Result};

pub const DEFAULT_PORT: u16 = 26660;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MockNodeError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub access_log: AccessLogMode,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            access_log: AccessLogMode::default(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MockNodeError::BadConfig(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

/// Where per-request access lines go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLogMode {
    /// Timestamped request lines on stdout.
    #[default]
    Stdout,
    /// `tracing` events at INFO.
    Tracing,
    Off,
}

fn default_listen() -> String {
    format!("0.0.0.0:{DEFAULT_PORT}")
}
