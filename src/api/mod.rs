//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP API endpoints for the Alumna service:
//! - Poetic description endpoints
//! - Site info and health endpoints

pub mod middleware;
pub mod poetry;
pub mod site;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use middleware::{ApiError, AppState, RequestStats};

/// Build the main API router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .nest("/poetry", poetry::router())
        .nest("/site", site::router())
        .fallback(middleware::api_not_found)
}

/// Build the complete router with middleware
///
/// CORS headers are only sent back to the configured origin (`*` allows any).
/// Fails when `cors_origin` is not a valid header value.
pub fn build_router(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let allow_origin = if cors_origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let origin = cors_origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", cors_origin, e))?;
        AllowOrigin::list([origin])
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .nest("/api/v1", build_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Request stats middleware (outermost layer, runs for all requests)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_stats_middleware,
        ))
        .with_state(state))
}
