//! Handlers for the public contact form.

use apexverse_core::error::CoreError;
use apexverse_core::schema::Schema;
use apexverse_db::models::contact::{ContactSubmission, CreateContactSubmission};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::json::AppJson;
use crate::state::AppState;

/// POST /api/contact
///
/// Stores the submission, then hands it to the notifier on a detached task.
/// The response never waits on, or reflects, email delivery.
pub async fn create_contact_submission(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactSubmission>)> {
    let input = input.normalized();
    input.check()?;

    let submission = state.store.create_contact_submission(&input).await?;

    tracing::info!(submission_id = %submission.id, "Contact submission received");

    state.notifier.notify(submission.clone());

    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/contact
pub async fn list_contact_submissions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactSubmission>>> {
    let submissions = state.store.list_contact_submissions().await?;
    Ok(Json(submissions))
}

/// GET /api/contact/{id}
pub async fn get_contact_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContactSubmission>> {
    let submission = state
        .store
        .get_contact_submission(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact submission",
            id,
        }))?;

    Ok(Json(submission))
}
