use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn database_operation(table: &'static str, operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }
}
