//! OpenAPI document served alongside the API.

use utoipa::OpenApi;

use crate::config::Settings;
use crate::schemas::{
    ApiV1RootResponse, ErrorResponse, HealthCheckResponse, RootResponse, ServiceStatus,
    StatusResponse,
};

use super::{handlers, v1};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Creative-Forge API",
        version = "1.0.0",
        description = "Backend API for Creative-Forge application"
    ),
    paths(handlers::root, handlers::health, handlers::api_v1_root, v1::status),
    components(schemas(
        ServiceStatus,
        RootResponse,
        HealthCheckResponse,
        ApiV1RootResponse,
        StatusResponse,
        ErrorResponse
    )),
    tags(
        (name = "root", description = "Service information and health"),
        (name = "v1", description = "Versioned API")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document, titled and versioned from settings.
pub fn openapi(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.api_title.clone();
    doc.info.version = settings.api_version.clone();
    doc
}
