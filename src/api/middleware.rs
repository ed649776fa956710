//! API middleware
//!
//! Contains:
//! - Shared application state
//! - The JSON error envelope
//! - Request statistics

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::services::{PoetryService, PoetryServiceError};

// ============================================================================
// Request Statistics
// ============================================================================

/// Counters fed by [`request_stats_middleware`] and reported by `/site/info`
pub struct RequestStats {
    requests: AtomicU64,
    /// Sum of handler latencies, in microseconds
    latency_us: AtomicU64,
    started: Instant,
}

/// Point-in-time copy of [`RequestStats`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub avg_response_time_us: f64,
    pub uptime_seconds: u64,
}

impl RequestStats {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            latency_us: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Count one finished request
    pub fn record(&self, latency_us: u64) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.latency_us.fetch_add(latency_us, Ordering::Relaxed);
    }

    pub fn total_requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Mean latency; zero before the first request
    pub fn avg_response_time_us(&self) -> f64 {
        match self.total_requests() {
            0 => 0.0,
            count => self.latency_us.load(Ordering::Relaxed) as f64 / count as f64,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_requests: self.total_requests(),
            avg_response_time_us: self.avg_response_time_us(),
            uptime_seconds: self.uptime_seconds(),
        }
    }
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub poetry_service: Arc<PoetryService>,
    pub request_stats: Arc<RequestStats>,
}

impl AppState {
    pub fn new(poetry_service: PoetryService) -> Self {
        Self {
            poetry_service: Arc::new(poetry_service),
            request_stats: Arc::new(RequestStats::new()),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error response for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<PoetryServiceError> for ApiError {
    fn from(err: PoetryServiceError) -> Self {
        match err {
            PoetryServiceError::ValidationError(message) => ApiError::validation_error(message),
        }
    }
}

/// Request statistics middleware
pub async fn request_stats_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    state
        .request_stats
        .record(start.elapsed().as_micros() as u64);
    response
}

/// Unknown API routes answer with the JSON error envelope
pub async fn api_not_found() -> ApiError {
    ApiError::not_found("No such endpoint")
}
