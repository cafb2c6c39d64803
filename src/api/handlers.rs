//! HTTP API handlers for the application-level endpoints.

use axum::{
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::config::{API_VERSION, SERVICE_NAME};
use crate::error::ApiError;
use crate::schemas::{
    ApiV1RootResponse, BaseSchema, HealthCheckResponse, RootResponse, ServiceStatus,
};

use super::{DOCS_PATH, ROUTE_PATHS};

/// Root endpoint returning API information.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = RootResponse)
    ),
    tag = "root"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {SERVICE_NAME}"),
        status: ServiceStatus::Operational,
        version: API_VERSION.to_string(),
        docs_url: DOCS_PATH.to_string(),
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheckResponse)
    ),
    tag = "root"
)]
pub async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::from_attributes(ServiceStatus::Healthy))
}

/// API v1 root endpoint.
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses(
        (status = 200, description = "Versioned API is mounted", body = ApiV1RootResponse)
    ),
    tag = "v1"
)]
pub async fn api_v1_root() -> Json<ApiV1RootResponse> {
    Json(ApiV1RootResponse {
        message: format!("{SERVICE_NAME} v1"),
        status: ServiceStatus::Ready,
    })
}

/// The same path with its trailing slash toggled, if that is a known route.
fn slash_alternative(path: &str) -> Option<&'static str> {
    let alternative = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        Some(_) => return None,
        None => format!("{path}/"),
    };
    ROUTE_PATHS
        .iter()
        .copied()
        .find(|route| *route == alternative)
}

/// Fallback for unmatched routes.
///
/// A known path with a missing or extra trailing slash gets a 307 to the
/// canonical form; anything else is a 404.
pub async fn fallback(uri: Uri) -> Response {
    match slash_alternative(uri.path()) {
        Some(path) => {
            let target = match uri.query() {
                Some(query) => format!("{path}?{query}"),
                None => path.to_string(),
            };
            Redirect::temporary(&target).into_response()
        }
        None => ApiError::not_found().into_response(),
    }
}
