//! Response formatting and request metrics middleware.

use std::time::Instant;

use axum::{
    body::{self, Body},
    extract::{MatchedPath, Request},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::metrics;

/// Upper bound on a framework error body reused as the detail message.
const MAX_DETAIL_BYTES: usize = 16 * 1024;

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Rewrite framework-generated error responses as `{detail, status_code}`.
///
/// Error responses that are already JSON pass through untouched. Any plain
/// text body (an extractor rejection message, for example) becomes the
/// detail; empty bodies fall back to the status' reason phrase. Headers
/// other than content type/length (such as `Allow` on a 405) are kept.
pub async fn format_http_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let detail = match body::to_bytes(body, MAX_DETAIL_BYTES).await {
        Ok(bytes) if !bytes.is_empty() => String::from_utf8_lossy(&bytes).trim().to_string(),
        _ => String::new(),
    };

    let error = if detail.is_empty() {
        ApiError::from_status(status)
    } else {
        ApiError::new(status, detail)
    };

    let mut formatted = error.into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            formatted.headers_mut().append(name.clone(), value.clone());
        }
    }
    formatted
}

/// Count requests and record their latency per matched route.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;

    metrics::inc_http_requests(method.as_str(), response.status().as_u16());
    metrics::record_http_latency(start, &endpoint);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_error_body_uses_reason_phrase() {
        let response = StatusCode::NOT_FOUND.into_response();
        let formatted = format_http_errors(response).await;

        assert_eq!(formatted.status(), StatusCode::NOT_FOUND);
        assert_eq!(formatted.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            body_json(formatted).await,
            json!({"detail": "Not Found", "status_code": 404})
        );
    }

    #[tokio::test]
    async fn text_error_body_becomes_detail() {
        let response = (StatusCode::BAD_REQUEST, "Invalid query string").into_response();
        let formatted = format_http_errors(response).await;

        assert_eq!(
            body_json(formatted).await,
            json!({"detail": "Invalid query string", "status_code": 400})
        );
    }

    #[tokio::test]
    async fn extra_headers_survive() {
        let mut response = StatusCode::METHOD_NOT_ALLOWED.into_response();
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET,HEAD"));

        let formatted = format_http_errors(response).await;

        assert_eq!(formatted.headers()[header::ALLOW], "GET,HEAD");
        assert_eq!(
            body_json(formatted).await,
            json!({"detail": "Method Not Allowed", "status_code": 405})
        );
    }

    #[tokio::test]
    async fn success_passes_through() {
        let response = (StatusCode::OK, "fine").into_response();
        let formatted = format_http_errors(response).await;

        assert_eq!(formatted.status(), StatusCode::OK);
        let bytes = body::to_bytes(formatted.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"fine");
    }
}
