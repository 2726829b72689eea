//! Distance conversion HTTP microservice.
//!
//! # Endpoints
//!
//! - `GET /api/v1/distancias/convert?milhas=<value>` - Convert miles to km
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! The convert endpoint is anonymous and answers `200` with
//! `{"miles": .., "km": ..}` or `400` with `{"message": ".."}`.

#![deny(warnings)]

use axum::{
    extract::Query,
    http::HeaderMap,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use conversor_lib::convert;
use conversor_service_shared::{
    extract_or_generate_request_id, health_live, health_ready, ConvertOutcome,
};

/// Query parameters accepted by the convert endpoint.
#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    /// Raw distance in miles. Optional at the transport level; required for
    /// a successful conversion.
    pub milhas: Option<String>,
}

/// Build the service router.
pub fn app() -> Router {
    Router::new()
        .route("/api/v1/distancias/convert", get(convert_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
}

/// Handle GET /api/v1/distancias/convert requests.
async fn convert_handler(headers: HeaderMap, Query(params): Query<ConvertParams>) -> ConvertOutcome {
    let request_id = extract_or_generate_request_id(&headers);

    info!(
        request_id = %request_id,
        milhas = ?params.milhas,
        "handling convert request"
    );

    ConvertOutcome::from(convert(params.milhas.as_deref()))
}
