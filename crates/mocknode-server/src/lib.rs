//! mocknode server library entry.
//!
//! Wires config, state, routes and the access log into an axum app. Consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod lifecycle;
pub mod obs;
pub mod ops;
pub mod router;
