//! Creative-Forge backend API.
//!
//! A small HTTP service: root and health endpoints, a versioned API group
//! under `/api/v1`, a CORS allow-list, and JSON error bodies of the form
//! `{"detail": ..., "status_code": ...}`.
//!
//! # Modules
//!
//! - [`config`]: Settings loaded from environment
//! - [`error`]: Process and HTTP error types
//! - [`schemas`]: Response shapes
//! - [`api`]: Router, handlers, middleware, and OpenAPI document
//! - [`lifecycle`]: Startup/shutdown hooks
//! - [`server`]: Listener bootstrap
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod metrics;
pub mod schemas;
pub mod server;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::Settings;
pub use error::{ApiError, AppError, Result};
