//! Error envelope returned by the inventory endpoints

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use inventory_store::{QueryParams, StoreError};
use serde::{Deserialize, Serialize};

/// A failed request, with everything needed to render the error body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    route: &'static str,
    user_message: &'static str,
    source: StoreError,
    query: QueryParams,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: ErrorDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    /// Error source chain, outermost first
    pub stack: Vec<String>,
    pub route: String,
    pub timestamp: String,
    pub query_parameters: QueryParams,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        route: &'static str,
        user_message: &'static str,
        source: StoreError,
        query: QueryParams,
    ) -> Self {
        Self {
            status,
            route,
            user_message,
            source,
            query,
        }
    }

    fn stack(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&self.source);
        while let Some(err) = current {
            chain.push(err.to_string());
            current = err.source();
        }
        chain
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.user_message.to_string(),
            details: ErrorDetails {
                message: self.source.to_string(),
                stack: self.stack(),
                route: self.route.to_string(),
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                query_parameters: self.query.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            route = self.route,
            status = self.status.as_u16(),
            error = %self.source,
            "Error on route {}",
            self.route
        );

        (self.status, Json(self.body())).into_response()
    }
}
