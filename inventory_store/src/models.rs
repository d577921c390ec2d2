//! Inventory row type and the response projections derived from it

use serde::{Deserialize, Serialize};

/// One row of `inventario`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub nombre: String,
    pub categoria: String,
    pub metal: String,
    pub precio: f64,
    pub stock: i64,
}

/// Minimal hyperlinked representation of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLink {
    pub id: i64,
    pub nombre: String,
    pub href: String,
}

impl ItemLink {
    pub fn href_for(id: i64) -> String {
        format!("/joyas/{}", id)
    }
}

impl From<&InventoryItem> for ItemLink {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            nombre: item.nombre.clone(),
            href: Self::href_for(item.id),
        }
    }
}

/// Listing response body: counts over the returned page plus one link per row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_joyas: usize,
    pub total_stock: i64,
    pub joyas: Vec<ItemLink>,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            total_joyas: items.len(),
            total_stock: items.iter().map(|item| item.stock).sum(),
            joyas: items.iter().map(ItemLink::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, nombre: &str, stock: i64) -> InventoryItem {
        InventoryItem {
            id,
            nombre: nombre.to_string(),
            categoria: "collar".to_string(),
            metal: "oro".to_string(),
            precio: 20000.0,
            stock,
        }
    }

    #[test]
    fn test_summary_totals() {
        let items = vec![item(1, "Collar Heart", 2), item(4, "Anillo Wish", 4), item(7, "Aros Berry", 0)];
        let summary = InventorySummary::from_items(&items);

        assert_eq!(summary.total_joyas, 3);
        assert_eq!(summary.total_stock, 6);
        assert_eq!(summary.joyas[1].href, "/joyas/4");
        assert_eq!(summary.joyas[1].nombre, "Anillo Wish");
    }

    #[test]
    fn test_summary_empty() {
        let summary = InventorySummary::from_items(&[]);
        assert_eq!(summary.total_joyas, 0);
        assert_eq!(summary.total_stock, 0);
        assert!(summary.joyas.is_empty());
    }

    #[test]
    fn test_summary_serialization_shape() {
        let summary = InventorySummary::from_items(&[item(3, "Pulsera", 5)]);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "total_joyas": 1,
                "total_stock": 5,
                "joyas": [{ "id": 3, "nombre": "Pulsera", "href": "/joyas/3" }]
            })
        );
    }
}
