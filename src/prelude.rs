//! Convenience re-exports for common Joyeria usage
//!
//! # Example
//!
//! ```rust
//! use joyeria::prelude::*;
//! ```

// Core Joyeria components
pub use crate::api::{AppState, ApiError};
pub use crate::core::Joyeria;
pub use crate::errors::JoyeriaError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};

// Store types
pub use inventory_store::prelude::*;

// Common external dependencies
pub use anyhow;
pub use axum;
pub use sqlx;
pub use tokio;
