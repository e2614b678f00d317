//! Online Shop DB
//!
//! Builds lazily-connecting MySQL engines for the `online_shop_2024`
//! database, layered the same way as the rest of our services:
//! domain types, an application-level factory and driven adapters.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{get_connection, ConnectionFactory};
pub use domain::models::{ConnectionParameters, ConnectionUrl, Dialect, Password};
pub use infrastructure::driven_adapters::{AppConfig, Engine, PoolConfig};
pub use shared::errors::ConnectionError;
