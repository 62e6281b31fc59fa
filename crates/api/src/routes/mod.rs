pub mod contact;
pub mod health;
pub mod portfolio;
pub mod testimonials;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /testimonials                         list, create
/// /testimonials/{id}                    get, delete
/// /testimonials/extract-x               prefill from an X post (POST)
/// /testimonials/extract-instagram       prefill from an Instagram post (POST)
///
/// /portfolio                            list, create
/// /portfolio/{id}                       get, delete
///
/// /upload/portfolio                     lineArt + fullArt images (POST, multipart)
/// /upload/testimonial                   single image (POST, multipart)
///
/// /contact                              submit (POST), list (GET)
/// /contact/{id}                         get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/testimonials", testimonials::router())
        .nest("/portfolio", portfolio::router())
        .nest("/upload", upload::router())
        .nest("/contact", contact::router())
}
