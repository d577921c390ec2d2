//! Core Joyeria functionality
//!
//! This module contains the main Joyeria struct: it owns the inventory store
//! for the lifetime of the process and hands it to the HTTP layer.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use inventory_store::{InventoryStore, PgInventoryStore};
use sqlx::postgres::PgConnectOptions;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{self, AppState};
use crate::errors::JoyeriaError;
use config::{DatabaseConfig, ServerConfig};

/// Main Joyeria coordinator that owns the store and serves the API
pub struct Joyeria {
    store: Arc<dyn InventoryStore>,
}

impl Joyeria {
    /// Create new Joyeria with a PostgreSQL connection pool
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, JoyeriaError> {
        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect_with(connect_options(config)).await?;
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connected to PostgreSQL"
        );

        Ok(Self::with_store(Arc::new(PgInventoryStore::new(pool))))
    }

    /// Create Joyeria around an existing store
    pub fn with_store(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Build the HTTP application
    pub fn router(&self) -> Router {
        api::router(AppState::new(self.store.clone()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), JoyeriaError> {
        self.store.health_check().await?;
        Ok(())
    }

    /// Bind the listener and serve until Ctrl+C
    pub async fn serve(self, server: &ServerConfig) -> Result<(), JoyeriaError> {
        let listener = TcpListener::bind(server.bind_address()).await?;
        info!("Server running at http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Connection settings passed field by field, so credentials are never URL-parsed
fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_config(password: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            database: "joyas".to_string(),
            username: "postgres".to_string(),
            password: password.to_string(),
            min_connections: 1,
            max_connections: 10,
            connection_timeout_seconds: 30,
            idle_timeout_seconds: 600,
            max_lifetime_seconds: 0,
        }
    }

    #[test]
    fn test_connect_options_keep_url_characters_in_password() {
        let options = connect_options(&database_config("p@ss/w#rd:?"));

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("joyas"));
    }
}
