//! SQL clause rendering
//!
//! Identifiers go through `ValidatedFieldName` and are double-quoted; values
//! never reach the SQL text and are returned as ordered `$n` parameters.

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::validation::{ValidatedFieldName, ValidationError};
use serde_json::Value;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions
    pub fn build_where_clause(conditions: &[QueryFilter]) -> Result<(String, Vec<Value>), ValidationError> {
        if conditions.is_empty() {
            return Ok((String::new(), Vec::new()));
        }

        let mut values = Vec::with_capacity(conditions.len());
        let mut parts = Vec::with_capacity(conditions.len());

        for condition in conditions {
            let field = ValidatedFieldName::new(&condition.field)?;
            values.push(condition.value.clone());
            parts.push(format!(
                "{} {} ${}",
                field.quoted(),
                condition.operator.to_sql(),
                values.len()
            ));
        }

        Ok((format!("WHERE {}", parts.join(" AND ")), values))
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> Result<String, ValidationError> {
        if order_by.is_empty() {
            return Ok(String::new());
        }

        let order_items = order_by
            .iter()
            .map(|(field, order)| {
                ValidatedFieldName::new(field).map(|f| format!("{} {}", f.quoted(), order.to_sql()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("ORDER BY {}", order_items.join(", ")))
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(pagination: &Pagination) -> String {
        pagination.to_sql()
    }

    /// Join the non-empty clauses of a SELECT statement
    pub fn build_select(table: &str, columns: &str, clauses: &[&str]) -> Result<String, ValidationError> {
        let table = ValidatedFieldName::new(table)?;

        let mut sql = String::with_capacity(64 + columns.len());
        sql.push_str("SELECT ");
        sql.push_str(columns);
        sql.push_str(" FROM ");
        sql.push_str(&table.quoted());

        for clause in clauses.iter().filter(|c| !c.is_empty()) {
            sql.push(' ');
            sql.push_str(clause);
        }

        Ok(sql)
    }
}
