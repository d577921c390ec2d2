//! Inventory Store - query translation and data access for the `inventario` table
//!
//! This crate turns raw query-string parameters into validated, typed queries,
//! compiles them into parameterized SQL and executes them against PostgreSQL.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod models;
pub mod params;
pub mod prelude;
pub mod query_builder;
pub mod store;
pub mod validation;

pub use errors::StoreError;
pub use models::{InventoryItem, InventorySummary, ItemLink};
pub use params::{InventoryFilter, ListQuery, Ordering, Page, QueryParams};
pub use query_builder::{BuiltQuery, Pagination, QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use store::{InventoryStore, MemoryInventoryStore, PgInventoryStore};
pub use validation::{InventoryColumn, ValidatedFieldName, ValidationError};

use sqlx::PgPool;

pub type DbPool = PgPool;

/// Name of the table every query reads from
pub const INVENTORY_TABLE: &str = "inventario";
