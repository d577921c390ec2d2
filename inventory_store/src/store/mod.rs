//! Inventory store
//!
//! `InventoryStore` is the seam between request handling and data access.
//! `PgInventoryStore` is the production implementation; `MemoryInventoryStore`
//! applies the same filter/order/page semantics to rows held in memory.

pub mod memory;
pub mod postgres;
pub mod queries;

pub use memory::MemoryInventoryStore;
pub use postgres::PgInventoryStore;

use crate::errors::StoreError;
use crate::models::InventoryItem;
use crate::params::{InventoryFilter, ListQuery};
use async_trait::async_trait;

/// Read-only access to the `inventario` table
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Filtered, ordered and paginated rows for the listing endpoint
    async fn list_items(&self, query: &ListQuery) -> Result<Vec<InventoryItem>, StoreError>;

    /// Filtered rows in store order, no pagination
    async fn list_by_filter(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, StoreError>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}
