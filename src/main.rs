//! Online Shop DB - Main Entry Point
//!
//! Loads configuration and builds the engine. No connection is opened.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use online_shop_db::{AppConfig, ConnectionFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "online_shop_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let engine = ConnectionFactory::from_config(config).get_connection()?;
    tracing::info!(url = %engine.url().redacted(), "Database engine ready");

    engine.close().await;

    Ok(())
}
