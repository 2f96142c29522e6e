//! mocknode core: transport-agnostic payload synthesis and error types.
//!
//! This crate builds every document the mock node serves (the canned health
//! and status JSON, and the per-request Prometheus metrics text). It carries
//! no HTTP or runtime dependencies so the payloads can be rendered and tested
//! without a listening socket.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod node;

/// Shared result type.
pub use error::{MockNodeError, Result};
