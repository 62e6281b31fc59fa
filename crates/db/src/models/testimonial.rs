//! Testimonial model and DTO.

use apexverse_core::error::CoreError;
use apexverse_core::schema::{
    normalize_optional, require_non_empty, require_platform, require_url, Schema,
};
use apexverse_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
///
/// `platform` is always one of `apexverse_core::platform::VALID_PLATFORMS`;
/// the schema check and a table constraint both enforce it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntityId,
    pub platform: String,
    pub post_url: String,
    pub author_name: String,
    pub author_handle: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub post_url: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_handle: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateTestimonial {
    pub fn normalized(mut self) -> Self {
        self.author_handle = normalize_optional(self.author_handle);
        self.image_url = normalize_optional(self.image_url);
        self
    }
}

impl Schema for CreateTestimonial {
    fn check(&self) -> Result<(), CoreError> {
        require_platform("platform", &self.platform)?;
        require_url("postUrl", &self.post_url, "Please enter a valid URL")?;
        require_non_empty("authorName", &self.author_name, "Author name is required")?;
        require_non_empty("content", &self.content, "Content is required")?;
        Ok(())
    }
}
