use axum::routing::{get, post};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Testimonial routes mounted at `/testimonials`.
///
/// ```text
/// GET    /                     -> list_testimonials
/// POST   /                     -> create_testimonial
/// POST   /extract-x            -> extract_x
/// POST   /extract-instagram    -> extract_instagram
/// GET    /{id}                 -> get_testimonial
/// DELETE /{id}                 -> delete_testimonial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route("/extract-x", post(testimonials::extract_x))
        .route("/extract-instagram", post(testimonials::extract_instagram))
        .route(
            "/{id}",
            get(testimonials::get_testimonial).delete(testimonials::delete_testimonial),
        )
}
