//! Domain Models
//!
//! Core types describing how to reach the database.

pub mod connection;

pub use connection::{ConnectionParameters, ConnectionUrl, Dialect, Password};
