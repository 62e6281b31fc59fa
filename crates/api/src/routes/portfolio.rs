use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes mounted at `/portfolio`.
///
/// ```text
/// GET    /        -> list_portfolio_items
/// POST   /        -> create_portfolio_item
/// GET    /{id}    -> get_portfolio_item
/// DELETE /{id}    -> delete_portfolio_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(portfolio::list_portfolio_items).post(portfolio::create_portfolio_item),
        )
        .route(
            "/{id}",
            get(portfolio::get_portfolio_item).delete(portfolio::delete_portfolio_item),
        )
}
