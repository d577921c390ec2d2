//! SQL for the two inventory reads

use crate::params::{InventoryFilter, ListQuery};
use crate::query_builder::{BuiltQuery, QueryBuilder};
use crate::validation::ValidationError;
use crate::INVENTORY_TABLE;

/// Select list matching `InventoryItem`; numeric columns are widened so any
/// integer or numeric column type decodes the same way. `precio` always comes
/// back as `double precision`, so integer prices serialize as JSON floats.
pub const INVENTORY_COLUMNS: &str = "\"id\"::bigint AS \"id\", \"nombre\", \"categoria\", \"metal\", \
     \"precio\"::double precision AS \"precio\", \"stock\"::bigint AS \"stock\"";

/// `SELECT ... FROM inventario [WHERE ...] ORDER BY <col> <dir> [LIMIT n OFFSET m]`
pub fn list_items_query(query: &ListQuery) -> Result<BuiltQuery, ValidationError> {
    QueryBuilder::new(INVENTORY_TABLE)
        .select(INVENTORY_COLUMNS)
        .filters(query.filter.to_query_filters())
        .order_by(query.ordering.column.as_str(), query.ordering.direction)
        .paginate(query.page.to_pagination()?)
        .build()
}

/// `SELECT ... FROM inventario [WHERE ...]`
pub fn filter_query(filter: &InventoryFilter) -> Result<BuiltQuery, ValidationError> {
    QueryBuilder::new(INVENTORY_TABLE)
        .select(INVENTORY_COLUMNS)
        .filters(filter.to_query_filters())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::QueryParams;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_listing_sql() {
        let query = ListQuery::from_params(&QueryParams::new()).unwrap();
        let built = list_items_query(&query).unwrap();

        assert_eq!(
            built.sql,
            format!("SELECT {} FROM \"inventario\" ORDER BY \"id\" ASC", INVENTORY_COLUMNS)
        );
        assert!(built.params.is_empty());
    }

    #[test]
    fn test_select_list_widens_every_numeric_column() {
        assert!(INVENTORY_COLUMNS.starts_with("\"id\"::bigint AS \"id\""));
        assert!(INVENTORY_COLUMNS.contains("\"precio\"::double precision AS \"precio\""));
        assert!(INVENTORY_COLUMNS.contains("\"stock\"::bigint AS \"stock\""));
    }

    #[test]
    fn test_full_listing_sql() {
        let query = ListQuery::from_params(&params(&[
            ("limits", "10"),
            ("page", "2"),
            ("order_by", "precio_DESC"),
            ("precio_min", "1000"),
            ("metal", "plata"),
        ]))
        .unwrap();
        let built = list_items_query(&query).unwrap();

        assert_eq!(
            built.sql,
            format!(
                "SELECT {} FROM \"inventario\" WHERE \"precio\" >= $1 AND \"metal\" = $2 \
                 ORDER BY \"precio\" DESC LIMIT 10 OFFSET 10",
                INVENTORY_COLUMNS
            )
        );
        assert_eq!(built.params, vec![json!(1000.0), json!("plata")]);
    }

    #[test]
    fn test_filter_sql_has_no_order_or_limit() {
        let filter = InventoryFilter::from_params(&params(&[
            ("categoria", "aros"),
            ("limits", "5"),
            ("order_by", "precio_DESC"),
        ]))
        .unwrap();
        let built = filter_query(&filter).unwrap();

        assert_eq!(
            built.sql,
            format!("SELECT {} FROM \"inventario\" WHERE \"categoria\" = $1", INVENTORY_COLUMNS)
        );
    }

    #[test]
    fn test_unfiltered_filter_sql() {
        let built = filter_query(&InventoryFilter::default()).unwrap();
        assert_eq!(built.sql, format!("SELECT {} FROM \"inventario\"", INVENTORY_COLUMNS));
    }
}
