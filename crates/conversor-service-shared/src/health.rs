//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for liveness and readiness probes.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, "ok" while the process is serving.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build time.
    pub version: String,
}

impl HealthStatus {
    /// Create a healthy status for the given service.
    pub fn ok(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running.
///
/// # Example
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"conversor-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::ok(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The conversion service holds no preloaded state, so readiness coincides
/// with liveness.
pub async fn health_ready() -> impl IntoResponse {
    let status = HealthStatus::ok(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}
