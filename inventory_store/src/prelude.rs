//! Convenience re-exports for common inventory-store usage

// Store trait and implementations
pub use crate::store::{InventoryStore, MemoryInventoryStore, PgInventoryStore};

// Error types
pub use crate::errors::StoreError;
pub use crate::validation::ValidationError;

// Request parameters
pub use crate::params::{InventoryFilter, ListQuery, Ordering, Page, QueryParams};

// Models
pub use crate::models::{InventoryItem, InventorySummary, ItemLink};

// Query building
pub use crate::query_builder::{BuiltQuery, QueryBuilder, QueryFilter, SortOrder};
pub use crate::validation::InventoryColumn;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use sqlx::PgPool;
