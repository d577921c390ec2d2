//! Validation module
//!
//! Checks applied to user input before any SQL is assembled: numeric filter
//! bounds, pagination integers, sort columns and directions, and SQL identifiers.

use std::fmt;
use std::str::FromStr;

/// Validation errors for request parameters and database identifiers
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A filter bound is not a finite number
    InvalidNumber { field: String, value: String },
    /// A pagination parameter is not a positive integer
    InvalidPositiveInteger { field: String, value: String },
    /// Page and page size combine into an offset that does not fit
    PageOutOfRange { page: i64, limit: i64 },
    /// Sort field is not one of the sortable inventory columns
    UnknownSortColumn(String),
    /// Sort direction is neither ASC nor DESC
    InvalidSortDirection(String),
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long (PostgreSQL limit is 63 characters)
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    Empty,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "The value of {} must be a valid number, got '{}'", field, value)
            }
            ValidationError::InvalidPositiveInteger { field, value } => {
                write!(f, "The value of {} must be a positive integer, got '{}'", field, value)
            }
            ValidationError::PageOutOfRange { page, limit } => {
                write!(f, "Page {} with limit {} is out of range", page, limit)
            }
            ValidationError::UnknownSortColumn(column) => {
                write!(
                    f,
                    "Cannot order by '{}': sortable columns are {}",
                    column,
                    InventoryColumn::names().join(", ")
                )
            }
            ValidationError::InvalidSortDirection(direction) => {
                write!(f, "Invalid sort direction '{}': expected ASC or DESC", direction)
            }
            ValidationError::InvalidCharacters(name) => {
                write!(f, "Invalid characters in name '{}': only alphanumeric characters and underscores are allowed", name)
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::Empty => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Columns of the `inventario` table
///
/// Every column is sortable; anything else in `order_by` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryColumn {
    Id,
    Nombre,
    Precio,
    Stock,
    Categoria,
    Metal,
}

impl InventoryColumn {
    pub const ALL: [InventoryColumn; 6] = [
        InventoryColumn::Id,
        InventoryColumn::Nombre,
        InventoryColumn::Precio,
        InventoryColumn::Stock,
        InventoryColumn::Categoria,
        InventoryColumn::Metal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryColumn::Id => "id",
            InventoryColumn::Nombre => "nombre",
            InventoryColumn::Precio => "precio",
            InventoryColumn::Stock => "stock",
            InventoryColumn::Categoria => "categoria",
            InventoryColumn::Metal => "metal",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(InventoryColumn::as_str).collect()
    }
}

impl FromStr for InventoryColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSortColumn(s.to_string()))
    }
}

impl fmt::Display for InventoryColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated identifier (table or column) that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    /// PostgreSQL identifier length limit
    const MAX_LENGTH: usize = 63;

    /// Create a new validated identifier
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form for embedding in SQL
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }

    fn validate_identifier(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: name.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        let first_char = name.chars().next().ok_or(ValidationError::Empty)?;
        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    fn is_reserved_keyword(name: &str) -> bool {
        const RESERVED_KEYWORDS: &[&str] = &[
            "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS", "AND",
            "OR", "NOT", "NULL", "TRUE", "FALSE", "ORDER", "BY", "GROUP", "HAVING", "LIMIT",
            "OFFSET", "UNION", "TABLE", "DROP", "CREATE", "ALTER", "GRANT", "ASC", "DESC",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl From<InventoryColumn> for ValidatedFieldName {
    fn from(column: InventoryColumn) -> Self {
        Self(column.as_str().to_string())
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
