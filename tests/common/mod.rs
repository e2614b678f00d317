//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a MySQL container and
//! pointing connection parameters at it.

use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mysql::Mysql;

use online_shop_db::{ConnectionParameters, Password};

/// Database created by the MySQL test image
pub const TEST_DATABASE: &str = "test";

/// Running MySQL server for a single test
pub struct TestDatabase {
    pub params: ConnectionParameters,
    _container: ContainerAsync<Mysql>,
}

impl TestDatabase {
    /// Start a fresh MySQL container (root user, empty password)
    pub async fn start() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get port");

        let params = ConnectionParameters {
            username: "root".to_string(),
            password: Password::new(""),
            host: host.to_string(),
            port,
            database: TEST_DATABASE.to_string(),
        };

        Self {
            params,
            _container: container,
        }
    }
}
