//! Poetic description API endpoints
//!
//! Handles HTTP requests for photo descriptions:
//! - POST /api/v1/poetry/generate - Style-varied descriptions from caption and tags
//! - POST /api/v1/poetry/context - Fixed sentence for a photo context
//! - GET /api/v1/poetry/styles - Style, context and vocabulary catalogue

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{ApiError, AppState};
use crate::models::{ContextTag, PoeticText};
use crate::services::GenerateInput;

/// Request for a context sentence
#[derive(Debug, Deserialize)]
pub struct ContextRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub caption: String,
}

/// Response for generated descriptions
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub descriptions: Vec<PoeticText>,
    pub generated_at: DateTime<Utc>,
}

/// Response for a context sentence
#[derive(Debug, Serialize, Deserialize)]
pub struct ContextResponse {
    pub context: ContextTag,
    pub text: String,
}

/// Catalogue entry for a style or context
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelInfo {
    pub key: String,
    pub label: String,
}

/// Catalogue entry for a phrase category
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub keys: Vec<String>,
}

/// Response for the catalogue
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogueResponse {
    pub styles: Vec<LabelInfo>,
    pub contexts: Vec<LabelInfo>,
    pub categories: Vec<CategoryInfo>,
    pub default_style_count: usize,
}

/// Build the poetry router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/context", post(generate_for_context))
        .route("/styles", get(catalogue))
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError::with_details(
        "VALIDATION_ERROR",
        "Invalid request body",
        serde_json::json!({ "reason": rejection.body_text() }),
    )
}

/// POST /api/v1/poetry/generate - Generate style-varied descriptions
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateInput>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(input) = payload.map_err(body_error)?;
    let descriptions = state.poetry_service.describe(&input)?;

    Ok(Json(GenerateResponse {
        descriptions,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/poetry/context - Pick the fixed sentence for a context
///
/// Unknown contexts resolve to `casual`.
async fn generate_for_context(
    State(state): State<AppState>,
    payload: Result<Json<ContextRequest>, JsonRejection>,
) -> Result<Json<ContextResponse>, ApiError> {
    let Json(request) = payload.map_err(body_error)?;
    let description = state
        .poetry_service
        .describe_for_context(&request.context, &request.caption)?;

    Ok(Json(ContextResponse {
        context: description.context,
        text: description.text,
    }))
}

/// GET /api/v1/poetry/styles - List styles, contexts and phrase categories
async fn catalogue(State(state): State<AppState>) -> Json<CatalogueResponse> {
    let service = &state.poetry_service;

    let styles = service
        .styles()
        .into_iter()
        .map(|style| LabelInfo {
            key: style.key().to_string(),
            label: style.label().to_string(),
        })
        .collect();

    let contexts = service
        .contexts()
        .iter()
        .map(|context| LabelInfo {
            key: context.key().to_string(),
            label: context.label().to_string(),
        })
        .collect();

    let categories = service
        .vocabulary()
        .into_iter()
        .map(|(name, keys)| CategoryInfo {
            name: name.to_string(),
            keys: keys.into_iter().map(str::to_string).collect(),
        })
        .collect();

    Json(CatalogueResponse {
        styles,
        contexts,
        categories,
        default_style_count: service.config().default_style_count,
    })
}
