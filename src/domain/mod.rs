//! Domain Layer
//!
//! Connection parameters and the connection string they render to.
//! Has no knowledge of the driver that consumes them.

pub mod models;
