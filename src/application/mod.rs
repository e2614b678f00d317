//! Application Layer
//!
//! The connection factory that callers use to obtain an engine.

pub mod connection_factory;

pub use connection_factory::{get_connection, ConnectionFactory};
