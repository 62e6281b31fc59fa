//! Storage adapter: one CRUD contract over every table, two backends.
//!
//! [`Store`] is what the route layer talks to. [`PgStore`] delegates to the
//! per-table repositories; [`MemoryStore`] keeps everything in process
//! memory for environments without a database. Both assign ids and
//! timestamps themselves and list newest-first, so callers cannot tell
//! them apart except through [`Store::backend_name`].

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use crate::models::testimonial::{CreateTestimonial, Testimonial};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failure of the durable backend. The in-memory backend never fails.
///
/// The wrapped error is for server-side logs only; clients get a generic
/// message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("Storage migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// CRUD contract shared by both storage backends.
///
/// `delete_*` returns `Ok(false)` when no row matched; deleting the same id
/// twice is never an error.
#[async_trait]
pub trait Store: Send + Sync {
    /// Short backend label (`"postgres"` or `"memory"`), surfaced by `/health`.
    fn backend_name(&self) -> &'static str;

    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError>;
    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError>;
    async fn get_contact_submission(
        &self,
        id: &str,
    ) -> Result<Option<ContactSubmission>, StoreError>;

    async fn create_testimonial(&self, input: &CreateTestimonial)
        -> Result<Testimonial, StoreError>;
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;
    async fn get_testimonial(&self, id: &str) -> Result<Option<Testimonial>, StoreError>;
    async fn delete_testimonial(&self, id: &str) -> Result<bool, StoreError>;
    async fn count_testimonials(&self) -> Result<i64, StoreError>;

    async fn create_portfolio_item(
        &self,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, StoreError>;
    async fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StoreError>;
    async fn get_portfolio_item(&self, id: &str) -> Result<Option<PortfolioItem>, StoreError>;
    async fn delete_portfolio_item(&self, id: &str) -> Result<bool, StoreError>;
}
