//! Inventory endpoint handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventory_store::{
    InventoryFilter, InventoryItem, InventoryStore, InventorySummary, ListQuery, QueryParams, StoreError,
};
use serde_json::json;

use super::error::ApiError;
use super::AppState;

pub const ROUTE_JOYAS: &str = "/joyas";
pub const ROUTE_FILTROS: &str = "/joyas/filtros";
pub const ROUTE_HEALTH: &str = "/health";

const LIST_ERROR_MESSAGE: &str = "Hubo un problema al recuperar las joyas.";
const FILTER_ERROR_MESSAGE: &str = "Parámetros incorrectos.";

/// GET /joyas
///
/// Every failure, including invalid input, is answered with 500.
pub async fn list_joyas(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<InventorySummary>, ApiError> {
    match fetch_listing(state.store.as_ref(), &params).await {
        Ok(items) => Ok(Json(InventorySummary::from_items(&items))),
        Err(e) => Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ROUTE_JOYAS,
            LIST_ERROR_MESSAGE,
            e,
            params,
        )),
    }
}

/// GET /joyas/filtros
///
/// Rows are returned as decoded into `InventoryItem`: `precio` is widened to a
/// float, so a stored `20000` serializes as `20000.0`.
/// Every failure, including store faults, is answered with 400.
pub async fn list_filtros(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    match fetch_filtered(state.store.as_ref(), &params).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            ROUTE_FILTROS,
            FILTER_ERROR_MESSAGE,
            e,
            params,
        )),
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Response {
    match state.store.health_check().await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}

async fn fetch_listing(
    store: &dyn InventoryStore,
    params: &QueryParams,
) -> Result<Vec<InventoryItem>, StoreError> {
    let query = ListQuery::from_params(params)?;
    store.list_items(&query).await
}

async fn fetch_filtered(
    store: &dyn InventoryStore,
    params: &QueryParams,
) -> Result<Vec<InventoryItem>, StoreError> {
    let filter = InventoryFilter::from_params(params)?;
    store.list_by_filter(&filter).await
}
