//! Handlers for portfolio items.

use apexverse_core::error::CoreError;
use apexverse_core::schema::Schema;
use apexverse_db::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::json::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/portfolio
pub async fn list_portfolio_items(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PortfolioItem>>> {
    let items = state.store.list_portfolio_items().await?;
    Ok(Json(items))
}

/// POST /api/portfolio
///
/// `lineArtUrl` and `fullArtUrl` are usually data URIs returned by
/// `POST /api/upload/portfolio`, but any non-empty reference is accepted.
pub async fn create_portfolio_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePortfolioItem>,
) -> AppResult<(StatusCode, Json<PortfolioItem>)> {
    let input = input.normalized();
    input.check()?;

    let item = state.store.create_portfolio_item(&input).await?;

    tracing::info!(
        portfolio_item_id = %item.id,
        title = %item.title,
        category = %item.category,
        "Portfolio item created",
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/portfolio/{id}
pub async fn get_portfolio_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PortfolioItem>> {
    let item = state
        .store
        .get_portfolio_item(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio item",
            id,
        }))?;

    Ok(Json(item))
}

/// DELETE /api/portfolio/{id}
pub async fn delete_portfolio_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_portfolio_item(&id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Portfolio item",
            id,
        }));
    }

    tracing::info!(portfolio_item_id = %id, "Portfolio item deleted");

    Ok(Json(MessageResponse {
        message: "Portfolio item deleted successfully",
    }))
}
