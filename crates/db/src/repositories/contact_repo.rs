//! Repository for the `contact_submissions` table.

use apexverse_core::types::EntityId;
use sqlx::PgPool;

use crate::models::contact::{ContactSubmission, CreateContactSubmission};

/// Column list for `contact_submissions` queries.
const COLUMNS: &str = "id, name, email, subject, message, created_at";

/// Provides data access for contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a submission under a pre-generated id. `created_at` is set by
    /// the database.
    pub async fn create(
        pool: &PgPool,
        id: &EntityId,
        dto: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (id, name, email, subject, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.subject)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(pool)
            .await
    }
}
