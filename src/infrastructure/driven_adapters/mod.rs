//! Driven Adapters
//!
//! Implementations backed by external systems:
//! - Configuration
//! - The MySQL driver

pub mod config;
pub mod database;

pub use config::{AppConfig, PoolConfig};
pub use database::{create_engine, Engine};
