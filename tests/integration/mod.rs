//! Integration tests for the Creative-Forge API.
//!
//! These drive the full router, configured through the same key/value
//! parsing the binary applies to the process environment.
//! Run with: cargo test --test integration

use axum::body::{self, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use creative_forge::api::create_router;
use creative_forge::config::Settings;

/// Router built from settings with no overrides.
fn default_app() -> Router {
    let settings = Settings::from_pairs(Vec::<(String, String)>::new()).unwrap();
    create_router(&settings)
}

async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn every_route_returns_its_literal_body() {
    let cases = [
        (
            "/",
            json!({
                "message": "Welcome to Creative-Forge API",
                "status": "operational",
                "version": "1.0.0",
                "docs_url": "/api/docs"
            }),
        ),
        (
            "/health",
            json!({"status": "healthy", "service": "Creative-Forge API"}),
        ),
        (
            "/api/v1/",
            json!({"message": "Creative-Forge API v1", "status": "ready"}),
        ),
        (
            "/api/v1/status",
            json!({"status": "operational", "version": "1.0.0"}),
        ),
    ];

    for (uri, expected) in cases {
        let (status, body) = call(default_app(), Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert_eq!(body, expected, "GET {uri}");
    }
}

#[tokio::test]
async fn undefined_paths_return_json_404() {
    for uri in ["/missing", "/api/v2/status", "/api/v1/status/extra"] {
        let (status, body) = call(default_app(), Method::GET, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(body, json!({"detail": "Not Found", "status_code": 404}));
    }
}

#[tokio::test]
async fn unsupported_method_keeps_allow_header() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/v1/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key(header::ALLOW));
}

#[tokio::test]
async fn cors_origins_from_environment_replace_defaults() {
    let settings = Settings::from_pairs([("CORS_ORIGINS", "https://studio.example.com")]).unwrap();
    let app = create_router(&settings);

    let preflight = |origin: &'static str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/health")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .clone()
        .oneshot(preflight("https://studio.example.com"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://studio.example.com"
    );

    let rejected = app.oneshot(preflight("http://localhost:3000")).await.unwrap();
    assert!(rejected
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[test]
fn settings_defaults_match_bootstrap_literals() {
    let settings = Settings::from_pairs(Vec::<(String, String)>::new()).unwrap();

    assert_eq!(settings.api_host, "0.0.0.0");
    assert_eq!(settings.api_port, 8000);
    assert!(settings.api_reload);
    assert_eq!(settings.bind_address(), "0.0.0.0:8000");
}

#[test]
fn invalid_port_is_a_configuration_error() {
    let err = Settings::from_pairs([("API_PORT", "not-a-port")]).unwrap_err();
    let message = creative_forge::AppError::from(err).to_string();
    assert!(message.starts_with("configuration error"), "{message}");
}
