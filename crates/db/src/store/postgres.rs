use apexverse_core::types::new_entity_id;
use async_trait::async_trait;

use super::{Store, StoreError};
use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::repositories::{ContactRepo, PortfolioRepo, TestimonialRepo};
use crate::DbPool;

/// Durable [`Store`] backed by Postgres.
///
/// Every operation is a single statement; nothing is wrapped in a
/// transaction and nothing is retried.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        Ok(ContactRepo::create(&self.pool, &new_entity_id(), input).await?)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(ContactRepo::list(&self.pool).await?)
    }

    async fn get_contact_submission(
        &self,
        id: &str,
    ) -> Result<Option<ContactSubmission>, StoreError> {
        Ok(ContactRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_testimonial(
        &self,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, StoreError> {
        Ok(TestimonialRepo::create(&self.pool, &new_entity_id(), input).await?)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(TestimonialRepo::list(&self.pool).await?)
    }

    async fn get_testimonial(&self, id: &str) -> Result<Option<Testimonial>, StoreError> {
        Ok(TestimonialRepo::find_by_id(&self.pool, id).await?)
    }

    async fn delete_testimonial(&self, id: &str) -> Result<bool, StoreError> {
        Ok(TestimonialRepo::delete(&self.pool, id).await?)
    }

    async fn count_testimonials(&self) -> Result<i64, StoreError> {
        Ok(TestimonialRepo::count(&self.pool).await?)
    }

    async fn create_portfolio_item(
        &self,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, StoreError> {
        Ok(PortfolioRepo::create(&self.pool, &new_entity_id(), input).await?)
    }

    async fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        Ok(PortfolioRepo::list(&self.pool).await?)
    }

    async fn get_portfolio_item(&self, id: &str) -> Result<Option<PortfolioItem>, StoreError> {
        Ok(PortfolioRepo::find_by_id(&self.pool, id).await?)
    }

    async fn delete_portfolio_item(&self, id: &str) -> Result<bool, StoreError> {
        Ok(PortfolioRepo::delete(&self.pool, id).await?)
    }
}
