//! Portfolio item model and DTO.

use apexverse_core::error::CoreError;
use apexverse_core::schema::{normalize_optional, require_non_empty, Schema};
use apexverse_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: EntityId,
    pub title: String,
    pub category: String,
    pub line_art_url: String,
    pub full_art_url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a portfolio item. Both image references are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub line_art_url: String,
    #[serde(default)]
    pub full_art_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreatePortfolioItem {
    pub fn normalized(mut self) -> Self {
        self.description = normalize_optional(self.description);
        self
    }
}

impl Schema for CreatePortfolioItem {
    fn check(&self) -> Result<(), CoreError> {
        require_non_empty("title", &self.title, "Title is required")?;
        require_non_empty("category", &self.category, "Category is required")?;
        require_non_empty("lineArtUrl", &self.line_art_url, "Line art image is required")?;
        require_non_empty("fullArtUrl", &self.full_art_url, "Full art image is required")?;
        Ok(())
    }
}
