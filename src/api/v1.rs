//! Versioned API group mounted under `/api/v1`.

use axum::{routing::get, Json, Router};

use crate::schemas::{BaseSchema, ServiceStatus, StatusResponse};

/// Path prefix of the versioned group.
pub const PREFIX: &str = "/api/v1";

/// Get API status.
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses(
        (status = 200, description = "API status", body = StatusResponse)
    ),
    tag = "v1"
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::from_attributes(ServiceStatus::Operational))
}

/// Routes of the versioned group, relative to [`PREFIX`].
pub fn router() -> Router {
    Router::new().route("/status", get(status))
}
