//! Query builder for single-table SELECT statements

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::validation::ValidationError;
use serde_json::Value;

/// SQL text plus the values for its `$n` placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Query builder for constructing SELECT statements over one table
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) table: String,
    pub(crate) columns: String,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) pagination: Pagination,
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: "*".to_string(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            pagination: Pagination::new(),
        }
    }

    /// Set the select list; this text is trusted and emitted as is
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Replace pagination
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Add limit
    pub fn limit(mut self, limit: i64) -> Self {
        self.pagination = self.pagination.with_limit(limit);
        self
    }

    /// Add offset
    pub fn offset(mut self, offset: i64) -> Self {
        self.pagination = self.pagination.with_offset(offset);
        self
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> Result<(String, Vec<Value>), ValidationError> {
        SqlGenerator::build_where_clause(&self.conditions)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self) -> Result<String, ValidationError> {
        SqlGenerator::build_order_clause(&self.order_by)
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(&self) -> String {
        SqlGenerator::build_limit_clause(&self.pagination)
    }

    /// Build the complete SELECT statement
    pub fn build(&self) -> Result<BuiltQuery, ValidationError> {
        let (where_clause, params) = self.build_where_clause()?;
        let order_clause = self.build_order_clause()?;
        let limit_clause = self.build_limit_clause();

        let sql = SqlGenerator::build_select(
            &self.table,
            &self.columns,
            &[where_clause.as_str(), order_clause.as_str(), limit_clause.as_str()],
        )?;

        Ok(BuiltQuery { sql, params })
    }
}
