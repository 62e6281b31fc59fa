use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact form routes mounted at `/contact`.
///
/// ```text
/// GET  /       -> list_contact_submissions
/// POST /       -> create_contact_submission
/// GET  /{id}   -> get_contact_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contact::list_contact_submissions).post(contact::create_contact_submission),
        )
        .route("/{id}", get(contact::get_contact_submission))
}
