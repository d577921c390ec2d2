//! In-memory implementation of `InventoryStore`

use super::InventoryStore;
use crate::errors::StoreError;
use crate::models::InventoryItem;
use crate::params::{InventoryFilter, ListQuery};
use crate::query_builder::SortOrder;
use crate::validation::InventoryColumn;
use async_trait::async_trait;
use std::cmp::Ordering as CmpOrdering;

/// Rows held in a `Vec`, queried with the same semantics as the SQL store
#[derive(Clone, Debug, Default)]
pub struct MemoryInventoryStore {
    items: Vec<InventoryItem>,
}

impl MemoryInventoryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    fn matching<'a>(&'a self, filter: &'a InventoryFilter) -> impl Iterator<Item = &'a InventoryItem> + 'a {
        self.items.iter().filter(move |item| matches_filter(item, filter))
    }
}

fn matches_filter(item: &InventoryItem, filter: &InventoryFilter) -> bool {
    filter.precio_min.is_none_or(|min| item.precio >= min)
        && filter.precio_max.is_none_or(|max| item.precio <= max)
        && filter.categoria.as_ref().is_none_or(|c| &item.categoria == c)
        && filter.metal.as_ref().is_none_or(|m| &item.metal == m)
}

fn compare_by(column: InventoryColumn, a: &InventoryItem, b: &InventoryItem) -> CmpOrdering {
    match column {
        InventoryColumn::Id => a.id.cmp(&b.id),
        InventoryColumn::Nombre => a.nombre.cmp(&b.nombre),
        InventoryColumn::Precio => a.precio.total_cmp(&b.precio),
        InventoryColumn::Stock => a.stock.cmp(&b.stock),
        InventoryColumn::Categoria => a.categoria.cmp(&b.categoria),
        InventoryColumn::Metal => a.metal.cmp(&b.metal),
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn list_items(&self, query: &ListQuery) -> Result<Vec<InventoryItem>, StoreError> {
        let mut rows: Vec<InventoryItem> = self.matching(&query.filter).cloned().collect();

        let column = query.ordering.column;
        rows.sort_by(|a, b| match query.ordering.direction {
            SortOrder::Asc => compare_by(column, a, b),
            SortOrder::Desc => compare_by(column, b, a),
        });

        let pagination = query.page.to_pagination()?;
        let offset = pagination.offset.unwrap_or(0).max(0) as usize;
        let rows = rows.into_iter().skip(offset);

        Ok(match pagination.limit {
            Some(limit) => rows.take(limit.max(0) as usize).collect(),
            None => rows.collect(),
        })
    }

    async fn list_by_filter(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, StoreError> {
        Ok(self.matching(filter).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
