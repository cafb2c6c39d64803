//! HTTP API: application endpoints, the versioned group, and their layers.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod v1;

/// Path of the interactive API documentation.
pub const DOCS_PATH: &str = "/api/docs";

/// Path of the ReDoc reference page.
pub const REDOC_PATH: &str = "/api/redoc";

/// Path of the OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Canonical paths of the JSON endpoints. A request for one of these with
/// the trailing slash added or removed is redirected here.
pub const ROUTE_PATHS: &[&str] = &["/", "/health", "/api/v1/", "/api/v1/status"];

pub use routes::{cors_layer, create_router};
