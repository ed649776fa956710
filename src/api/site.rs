//! Public site information API
//!
//! Provides service metadata for the front-end and for uptime checks.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::middleware::AppState;

/// Response for public site info
#[derive(Debug, Serialize, Deserialize)]
pub struct SiteInfoResponse {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_requests: u64,
    pub avg_response_time_us: f64,
}

/// Response for health checks
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Build the public site router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(get_site_info))
        .route("/health", get(health))
}

/// GET /api/v1/site/info - Service name, version and request statistics
async fn get_site_info(State(state): State<AppState>) -> Json<SiteInfoResponse> {
    let stats = state.request_stats.snapshot();
    Json(SiteInfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: stats.uptime_seconds,
        total_requests: stats.total_requests,
        avg_response_time_us: stats.avg_response_time_us,
    })
}

/// GET /api/v1/site/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
