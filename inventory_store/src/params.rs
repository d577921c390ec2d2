//! Typed request parameters
//!
//! Raw query-string values are converted here, in one pass, into the typed
//! structures the query layer consumes. Nothing downstream sees raw strings
//! except filter values, which are bound as SQL parameters.

use crate::query_builder::{Pagination, QueryFilter, SortOrder};
use crate::validation::{InventoryColumn, ValidationError};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw query-string parameters as received
pub type QueryParams = BTreeMap<String, String>;

pub const PARAM_PRECIO_MIN: &str = "precio_min";
pub const PARAM_PRECIO_MAX: &str = "precio_max";
pub const PARAM_CATEGORIA: &str = "categoria";
pub const PARAM_METAL: &str = "metal";
pub const PARAM_LIMITS: &str = "limits";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_ORDER_BY: &str = "order_by";

/// Filter predicates shared by both endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

impl InventoryFilter {
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            precio_min: parse_number(params, PARAM_PRECIO_MIN)?,
            precio_max: parse_number(params, PARAM_PRECIO_MAX)?,
            categoria: present(params, PARAM_CATEGORIA).map(str::to_string),
            metal: present(params, PARAM_METAL).map(str::to_string),
        })
    }

    /// Conditions in fixed order: precio lower bound, upper bound, categoria, metal
    pub fn to_query_filters(&self) -> Vec<QueryFilter> {
        let mut filters = Vec::with_capacity(4);

        if let Some(min) = self.precio_min {
            filters.push(QueryFilter::gte(InventoryColumn::Precio.as_str(), Value::from(min)));
        }
        if let Some(max) = self.precio_max {
            filters.push(QueryFilter::lte(InventoryColumn::Precio.as_str(), Value::from(max)));
        }
        if let Some(categoria) = &self.categoria {
            filters.push(QueryFilter::eq(
                InventoryColumn::Categoria.as_str(),
                Value::String(categoria.clone()),
            ));
        }
        if let Some(metal) = &self.metal {
            filters.push(QueryFilter::eq(
                InventoryColumn::Metal.as_str(),
                Value::String(metal.clone()),
            ));
        }

        filters
    }

    pub fn is_empty(&self) -> bool {
        self.precio_min.is_none()
            && self.precio_max.is_none()
            && self.categoria.is_none()
            && self.metal.is_none()
    }
}

/// Sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub column: InventoryColumn,
    pub direction: SortOrder,
}

impl Default for Ordering {
    fn default() -> Self {
        Self {
            column: InventoryColumn::Id,
            direction: SortOrder::Asc,
        }
    }
}

impl Ordering {
    /// Parse `<field>_<direction>`, split on the first underscore.
    /// A missing or empty direction sorts ascending.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let (field, direction) = match raw.split_once('_') {
            Some((field, "")) => (field, SortOrder::Asc),
            Some((field, direction)) => (field, direction.parse::<SortOrder>()?),
            None => (raw, SortOrder::Asc),
        };

        Ok(Self {
            column: field.parse()?,
            direction,
        })
    }
}

/// Page size and 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<i64>,
    pub page: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: None, page: 1 }
    }
}

impl Page {
    /// `(page - 1) * limit`, or 0 without a limit
    pub fn offset(&self) -> Result<i64, ValidationError> {
        match self.limit {
            Some(limit) => (self.page - 1)
                .checked_mul(limit)
                .ok_or(ValidationError::PageOutOfRange {
                    page: self.page,
                    limit,
                }),
            None => Ok(0),
        }
    }

    /// LIMIT/OFFSET only when a page size was requested
    pub fn to_pagination(&self) -> Result<Pagination, ValidationError> {
        match self.limit {
            Some(limit) => Ok(Pagination::new()
                .with_limit(limit)
                .with_offset(self.offset()?)),
            None => Ok(Pagination::new()),
        }
    }
}

/// Fully validated request for the listing endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: InventoryFilter,
    pub ordering: Ordering,
    pub page: Page,
}

impl ListQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        let filter = InventoryFilter::from_params(params)?;

        let limit = parse_positive(params, PARAM_LIMITS)?;
        let page = parse_positive(params, PARAM_PAGE)?.unwrap_or(1);
        let page = Page { limit, page };
        // Surface offset overflow here rather than at query time
        page.offset()?;

        let ordering = match present(params, PARAM_ORDER_BY) {
            Some(raw) => Ordering::parse(raw)?,
            None => Ordering::default(),
        };

        Ok(Self {
            filter,
            ordering,
            page,
        })
    }
}

/// A parameter counts only when present and non-empty
fn present<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_number(params: &QueryParams, name: &str) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = present(params, name) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ValidationError::InvalidNumber {
            field: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_positive(params: &QueryParams, name: &str) -> Result<Option<i64>, ValidationError> {
    let Some(raw) = present(params, name) else {
        return Ok(None);
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ValidationError::InvalidPositiveInteger {
            field: name.to_string(),
            value: raw.to_string(),
        }),
    }
}
