use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Image upload routes mounted at `/upload`.
///
/// ```text
/// POST /portfolio     -> upload_portfolio_images
/// POST /testimonial   -> upload_testimonial_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", post(upload::upload_portfolio_images))
        .route("/testimonial", post(upload::upload_testimonial_image))
}
