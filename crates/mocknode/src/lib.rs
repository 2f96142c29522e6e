//! Top-level facade crate for mocknode.
//!
//! Re-exports the payload core and the server library so users can depend on a single crate.

pub mod core {
    pub use mocknode_core::*;
}

pub mod server {
    pub use mocknode_server::*;
}
