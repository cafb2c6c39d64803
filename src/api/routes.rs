//! HTTP API route definitions.

use axum::{
    http::HeaderValue,
    middleware::{from_fn, map_response},
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Settings;

use super::handlers::{api_v1_root, fallback, health, root};
use super::middleware::{format_http_errors, track_metrics};
use super::{docs, v1, DOCS_PATH, OPENAPI_PATH, REDOC_PATH};

/// CORS policy: the configured allow-list, with credentials.
///
/// Credentials rule out `*`, so methods and headers mirror the preflight
/// request instead.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the API router.
pub fn create_router(settings: &Settings) -> Router {
    let openapi = docs::openapi(settings);
    let swagger = SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi.clone());
    let redoc = Redoc::with_url(REDOC_PATH, openapi);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/", get(api_v1_root))
        .nest(v1::PREFIX, v1::router())
        .merge(swagger)
        .merge(redoc)
        .fallback(fallback)
        .layer(map_response(format_http_errors))
        .layer(from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(settings))
}
