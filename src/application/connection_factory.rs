//! Connection Factory
//!
//! Validates connection parameters, renders the connection string and hands it
//! to the driver. Holds no state between calls.

use validator::Validate;

use crate::domain::models::{ConnectionParameters, ConnectionUrl, Dialect};
use crate::infrastructure::driven_adapters::config::{AppConfig, PoolConfig};
use crate::infrastructure::driven_adapters::database::{create_engine, Engine};
use crate::shared::errors::ConnectionError;

/// Builds engines for one set of connection parameters
#[derive(Debug, Clone, Default)]
pub struct ConnectionFactory {
    params: ConnectionParameters,
    dialect: Dialect,
    pool: PoolConfig,
}

impl ConnectionFactory {
    /// Create a factory using the default `mysql+pymysql` dialect
    #[must_use]
    pub fn new(params: ConnectionParameters) -> Self {
        Self {
            params,
            dialect: Dialect::default(),
            pool: PoolConfig::default(),
        }
    }

    /// Create a factory from loaded configuration
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            params: config.database,
            dialect: config.dialect,
            pool: config.pool,
        }
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    #[must_use]
    pub fn params(&self) -> &ConnectionParameters {
        &self.params
    }

    /// Render the connection string without creating an engine
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::InvalidParameters` if any field is malformed.
    pub fn connection_url(&self) -> Result<ConnectionUrl, ConnectionError> {
        self.params.validate()?;
        Ok(ConnectionUrl::new(&self.dialect, &self.params))
    }

    /// Build a new engine; no network I/O happens here
    ///
    /// Every call returns an independent engine with its own pool. Must be
    /// called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::InvalidParameters` for malformed parameters,
    /// `ConnectionError::UnsupportedDialect` if the driver layer cannot serve
    /// the dialect and `ConnectionError::Driver` if the driver rejects the URL.
    pub fn get_connection(&self) -> Result<Engine, ConnectionError> {
        tracing::debug!(
            host = %self.params.host,
            port = self.params.port,
            database = %self.params.database,
            dialect = %self.dialect,
            "Building database engine"
        );

        let url = self.connection_url()?;
        create_engine(&url, &self.pool)
    }
}

/// Engine for the `online_shop_2024` development database
///
/// # Errors
///
/// See [`ConnectionFactory::get_connection`].
pub fn get_connection() -> Result<Engine, ConnectionError> {
    ConnectionFactory::default().get_connection()
}
