//! Repository for the `portfolio_items` table.

use apexverse_core::types::EntityId;
use sqlx::PgPool;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem};

/// Column list for `portfolio_items` queries.
const COLUMNS: &str = "\
    id, title, category, line_art_url, full_art_url, description, created_at";

/// Provides data access for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    pub async fn create(
        pool: &PgPool,
        id: &EntityId,
        dto: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items \
                 (id, title, category, line_art_url, full_art_url, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.category)
            .bind(&dto.line_art_url)
            .bind(&dto.full_art_url)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// List all portfolio items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolio_items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a portfolio item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_items")
            .fetch_one(pool)
            .await
    }
}
