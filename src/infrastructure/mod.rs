//! Infrastructure Layer
//!
//! Driven adapters: configuration loading and the sqlx-backed engine.

pub mod driven_adapters;
