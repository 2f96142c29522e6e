//! Shared error type across mocknode crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MockNodeError>;

/// Unified error type used by core and server.
///
/// Request handling never fails; these only surface while the process boots.
#[derive(Debug, Error)]
pub enum MockNodeError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl MockNodeError {
    /// Stable short code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            MockNodeError::BadConfig(_) => "BAD_CONFIG",
            MockNodeError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            MockNodeError::Io(_) => "IO",
            MockNodeError::Internal(_) => "INTERNAL",
        }
    }
}
