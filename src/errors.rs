//! Error types for the Joyeria crate
//!
//! Startup and serving failures. Per-request failures are rendered by
//! [`crate::api::ApiError`] and never reach this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoyeriaError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] inventory_store::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
