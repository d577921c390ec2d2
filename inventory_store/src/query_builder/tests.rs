//! Query builder tests

#[cfg(test)]
mod tests {
    use crate::query_builder::{Pagination, QueryBuilder, QueryFilter, QueryOperator, SortOrder};
    use crate::validation::ValidationError;
    use serde_json::json;

    // ========================================
    // WHERE clause
    // ========================================

    #[test]
    fn test_no_conditions_no_where() {
        let query = QueryBuilder::new("inventario").build().unwrap();
        assert_eq!(query.sql, "SELECT * FROM \"inventario\"");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_conditions_joined_with_and_in_order() {
        let query = QueryBuilder::new("inventario")
            .filter(QueryFilter::gte("precio", json!(100.0)))
            .filter(QueryFilter::lte("precio", json!(500.0)))
            .filter(QueryFilter::eq("categoria", json!("aros")))
            .build()
            .unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM \"inventario\" WHERE \"precio\" >= $1 AND \"precio\" <= $2 AND \"categoria\" = $3"
        );
        assert_eq!(query.params, vec![json!(100.0), json!(500.0), json!("aros")]);
    }

    #[test]
    fn test_values_never_reach_sql_text() {
        let payload = "'; DROP TABLE inventario; --";
        let query = QueryBuilder::new("inventario")
            .filter(QueryFilter::eq("metal", json!(payload)))
            .build()
            .unwrap();

        assert!(!query.sql.contains("DROP"));
        assert_eq!(query.params, vec![json!(payload)]);
    }

    #[test]
    fn test_invalid_field_in_condition() {
        let result = QueryBuilder::new("inventario")
            .filter(QueryFilter::eq("metal\" OR 1=1 --", json!("oro")))
            .build();

        assert!(matches!(result, Err(ValidationError::InvalidCharacters(_))));
    }

    #[test]
    fn test_operator_sql() {
        assert_eq!(QueryOperator::Eq.to_sql(), "=");
        assert_eq!(QueryOperator::Gte.to_sql(), ">=");
        assert_eq!(QueryOperator::Lte.to_sql(), "<=");
    }

    // ========================================
    // ORDER BY / LIMIT / OFFSET
    // ========================================

    #[test]
    fn test_order_and_pagination() {
        let query = QueryBuilder::new("inventario")
            .order_by("precio", SortOrder::Desc)
            .limit(10)
            .offset(10)
            .build()
            .unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM \"inventario\" ORDER BY \"precio\" DESC LIMIT 10 OFFSET 10"
        );
    }

    #[test]
    fn test_no_pagination_no_limit_clause() {
        let query = QueryBuilder::new("inventario")
            .order_by("id", SortOrder::Asc)
            .paginate(Pagination::new())
            .build()
            .unwrap();

        assert!(!query.sql.contains("LIMIT"));
        assert!(!query.sql.contains("OFFSET"));
        assert!(query.sql.ends_with("ORDER BY \"id\" ASC"));
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!(
            "DOWN".parse::<SortOrder>().unwrap_err(),
            ValidationError::InvalidSortDirection("DOWN".to_string())
        );
    }

    #[test]
    fn test_pagination_to_sql() {
        assert_eq!(Pagination::new().to_sql(), "");
        assert_eq!(Pagination::new().with_limit(5).to_sql(), "LIMIT 5");
        assert_eq!(
            Pagination::new().with_limit(5).with_offset(20).to_sql(),
            "LIMIT 5 OFFSET 20"
        );
    }

    // ========================================
    // Full statement
    // ========================================

    #[test]
    fn test_select_list_and_all_clauses() {
        let query = QueryBuilder::new("inventario")
            .select("id, nombre")
            .filters(vec![
                QueryFilter::eq("categoria", json!("collar")),
                QueryFilter::eq("metal", json!("plata")),
            ])
            .order_by("nombre", SortOrder::Asc)
            .limit(3)
            .offset(0)
            .build()
            .unwrap();

        assert_eq!(
            query.sql,
            "SELECT id, nombre FROM \"inventario\" WHERE \"categoria\" = $1 AND \"metal\" = $2 ORDER BY \"nombre\" ASC LIMIT 3 OFFSET 0"
        );
        assert_eq!(query.params.len(), 2);
    }

    #[test]
    fn test_invalid_table_name() {
        let result = QueryBuilder::new("inventario; --").build();
        assert!(result.is_err());
    }
}
