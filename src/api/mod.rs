//! HTTP layer
//!
//! Router construction, shared state and request logging.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use inventory_store::InventoryStore;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;


pub use error::{ApiError, ErrorBody, ErrorDetails};
pub use handlers::{ROUTE_FILTROS, ROUTE_HEALTH, ROUTE_JOYAS};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }
}

/// Build the application router with logging layers and state attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_JOYAS, get(handlers::list_joyas))
        .route(ROUTE_FILTROS, get(handlers::list_filtros))
        .route(ROUTE_HEALTH, get(handlers::health))
        .layer(middleware::from_fn(log_request))
        // Trace - access log spans for every request
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Log the method and URI of every incoming request
async fn log_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), uri = %req.uri(), "Route requested");
    next.run(req).await
}
