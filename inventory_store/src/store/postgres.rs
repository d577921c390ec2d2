//! PostgreSQL implementation of `InventoryStore`

use super::queries::{filter_query, list_items_query};
use super::InventoryStore;
use crate::errors::StoreError;
use crate::models::InventoryItem;
use crate::params::{InventoryFilter, ListQuery};
use crate::query_builder::BuiltQuery;
use crate::{DbPool, INVENTORY_TABLE};
use async_trait::async_trait;

type ItemQuery<'q> = sqlx::query::QueryAs<'q, sqlx::Postgres, InventoryItem, sqlx::postgres::PgArguments>;

/// Inventory store backed by a shared connection pool
#[derive(Clone, Debug)]
pub struct PgInventoryStore {
    pool: DbPool,
}

impl PgInventoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn fetch(&self, built: BuiltQuery, operation: &'static str) -> Result<Vec<InventoryItem>, StoreError> {
        crate::debug_log!(sql = %built.sql, params = built.params.len(), "Executing {}", operation);

        let mut query = sqlx::query_as::<_, InventoryItem>(&built.sql);
        for param in built.params {
            query = bind_param(query, param);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::database_operation(INVENTORY_TABLE, operation, e))
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn list_items(&self, query: &ListQuery) -> Result<Vec<InventoryItem>, StoreError> {
        let built = list_items_query(query)?;
        self.fetch(built, "list_items").await
    }

    async fn list_by_filter(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, StoreError> {
        let built = filter_query(filter)?;
        self.fetch(built, "list_by_filter").await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database_operation(INVENTORY_TABLE, "health_check", e))?;
        Ok(())
    }
}

/// Bind a JSON value as the closest PostgreSQL parameter type
fn bind_param(query: ItemQuery<'_>, param: serde_json::Value) -> ItemQuery<'_> {
    match param {
        serde_json::Value::String(s) => query.bind(s),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    query.bind(i as i32)
                } else {
                    query.bind(i)
                }
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        serde_json::Value::Bool(b) => query.bind(b),
        serde_json::Value::Null => query.bind(Option::<String>::None),
        other => query.bind(other.to_string()),
    }
}
