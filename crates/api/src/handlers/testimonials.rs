//! Handlers for testimonials and their social-post prefill.

use apexverse_core::error::CoreError;
use apexverse_core::platform::Platform;
use apexverse_core::schema::Schema;
use apexverse_db::models::testimonial::{CreateTestimonial, Testimonial};
use apexverse_extract::ExtractedContent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::json::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body of the extract endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/testimonials
///
/// All testimonials, newest first.
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.store.list_testimonials().await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let input = input.normalized();
    input.check()?;

    let testimonial = state.store.create_testimonial(&input).await?;

    tracing::info!(
        testimonial_id = %testimonial.id,
        platform = %testimonial.platform,
        "Testimonial created",
    );

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// GET /api/testimonials/{id}
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = state
        .store
        .get_testimonial(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_testimonial(&id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(testimonial_id = %id, "Testimonial deleted");

    Ok(Json(MessageResponse {
        message: "Testimonial deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Prefill from a public post
// ---------------------------------------------------------------------------

/// POST /api/testimonials/extract-x
pub async fn extract_x(
    State(state): State<AppState>,
    AppJson(input): AppJson<ExtractRequest>,
) -> AppResult<Json<ExtractedContent>> {
    extract_from(&state, Platform::X, input).await
}

/// POST /api/testimonials/extract-instagram
///
/// Usually fails: Instagram wants an access token. The 400 tells the admin
/// to type the testimonial in instead.
pub async fn extract_instagram(
    State(state): State<AppState>,
    AppJson(input): AppJson<ExtractRequest>,
) -> AppResult<Json<ExtractedContent>> {
    extract_from(&state, Platform::Instagram, input).await
}

async fn extract_from(
    state: &AppState,
    platform: Platform,
    input: ExtractRequest,
) -> AppResult<Json<ExtractedContent>> {
    let url = input
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("URL is required".into()))?;

    let content = state
        .extractor
        .extract(platform, &url)
        .await
        .map_err(|source| AppError::Extraction { platform, source })?;

    Ok(Json(content))
}
