//! Error Types
//!
//! Errors raised while building a connection handle.

use thiserror::Error;

/// Errors surfaced by the connection factory
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Invalid connection parameters: {0:?}")]
    InvalidParameters(Vec<String>),

    #[error("Invalid dialect '{0}' (expected <engine> or <engine>+<driver>)")]
    InvalidDialect(String),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error(transparent)]
    Driver(#[from] sqlx::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl From<validator::ValidationErrors> for ConnectionError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ConnectionError::InvalidParameters(messages)
    }
}
