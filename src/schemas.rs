//! Response schemas shared by the application and the versioned router.

use serde::{Deserialize, Serialize};
use strum::Display;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::config::{API_VERSION, SERVICE_NAME};

/// Common behaviour for response shapes.
///
/// Any source convertible into the schema can build it, so handlers stay
/// decoupled from where the attributes come from.
pub trait BaseSchema: Serialize + Sized {
    /// Build the schema from an attribute-bearing source.
    fn from_attributes<S: Into<Self>>(source: S) -> Self {
        source.into()
    }
}

/// Closed vocabulary of service status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceStatus {
    /// Serving requests normally.
    Operational,
    /// Liveness probe passed.
    Healthy,
    /// Versioned API group is mounted.
    Ready,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: ServiceStatus,
    pub service: String,
    /// Omitted from the body when absent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub timestamp: Option<OffsetDateTime>,
}

impl From<ServiceStatus> for HealthCheckResponse {
    fn from(status: ServiceStatus) -> Self {
        Self {
            status,
            service: SERVICE_NAME.to_string(),
            timestamp: None,
        }
    }
}

impl BaseSchema for HealthCheckResponse {}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: ServiceStatus,
    pub version: String,
    pub docs_url: String,
}

impl BaseSchema for RootResponse {}

/// Body of `GET /api/v1/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiV1RootResponse {
    pub message: String,
    pub status: ServiceStatus,
}

impl BaseSchema for ApiV1RootResponse {}

/// Body of `GET /api/v1/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: ServiceStatus,
    pub version: String,
}

impl From<ServiceStatus> for StatusResponse {
    fn from(status: ServiceStatus) -> Self {
        Self {
            status,
            version: API_VERSION.to_string(),
        }
    }
}

impl BaseSchema for StatusResponse {}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
    pub status_code: u16,
}

impl BaseSchema for ErrorResponse {}
