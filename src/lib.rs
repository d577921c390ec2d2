//! # Joyeria
//!
//! A read-only HTTP query service over the `inventario` jewelry table in PostgreSQL.
//!
//! Two endpoints are exposed:
//!
//! - `GET /joyas`: filtered, ordered and paginated listing, answered with the
//!   number of items, their total stock and a link per item.
//! - `GET /joyas/filtros`: filtered rows as stored, without ordering or pagination.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use joyeria::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     joyeria::logging::init_logging(&config.logging)?;
//!
//!     let joyeria = Joyeria::connect(&config.database).await?;
//!     joyeria.serve(&config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod logging;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::Joyeria;
pub use errors::JoyeriaError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};

// Re-export the store crate used by the public API
pub use inventory_store;
