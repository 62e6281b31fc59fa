//! Repository for the `testimonials` table.

use apexverse_core::types::EntityId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial};

/// Column list for `testimonials` queries.
const COLUMNS: &str = "\
    id, platform, post_url, author_name, author_handle, \
    content, image_url, created_at";

/// Provides data access for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial under a pre-generated id.
    pub async fn create(
        pool: &PgPool,
        id: &EntityId,
        dto: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                 (id, platform, post_url, author_name, author_handle, content, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&dto.platform)
            .bind(&dto.post_url)
            .bind(&dto.author_name)
            .bind(&dto.author_handle)
            .bind(&dto.content)
            .bind(&dto.image_url)
            .fetch_one(pool)
            .await
    }

    /// List all testimonials, newest first.
    ///
    /// Ids are UUID v7 text, so `id DESC` breaks `created_at` ties in
    /// insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }
}
