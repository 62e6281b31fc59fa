use apexverse_core::types::new_entity_id;
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{Store, StoreError};
use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use crate::models::testimonial::{CreateTestimonial, Testimonial};

#[derive(Default)]
struct Tables {
    contact_submissions: IndexMap<String, ContactSubmission>,
    testimonials: IndexMap<String, Testimonial>,
    portfolio_items: IndexMap<String, PortfolioItem>,
}

/// Process-lifetime [`Store`] for running without a database.
///
/// Maps keep insertion order, so newest-first listing is a reverse walk
/// and never depends on clock resolution. Data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest-first snapshot of an insertion-ordered map.
fn newest_first<T: Clone>(map: &IndexMap<String, T>) -> Vec<T> {
    map.values().rev().cloned().collect()
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let submission = ContactSubmission {
            id: new_entity_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            subject: input.subject.clone(),
            message: input.message.clone(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .contact_submissions
            .insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(newest_first(&self.tables.read().await.contact_submissions))
    }

    async fn get_contact_submission(
        &self,
        id: &str,
    ) -> Result<Option<ContactSubmission>, StoreError> {
        Ok(self.tables.read().await.contact_submissions.get(id).cloned())
    }

    async fn create_testimonial(
        &self,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, StoreError> {
        let testimonial = Testimonial {
            id: new_entity_id(),
            platform: input.platform.clone(),
            post_url: input.post_url.clone(),
            author_name: input.author_name.clone(),
            author_handle: input.author_handle.clone(),
            content: input.content.clone(),
            image_url: input.image_url.clone(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .testimonials
            .insert(testimonial.id.clone(), testimonial.clone());
        Ok(testimonial)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(newest_first(&self.tables.read().await.testimonials))
    }

    async fn get_testimonial(&self, id: &str) -> Result<Option<Testimonial>, StoreError> {
        Ok(self.tables.read().await.testimonials.get(id).cloned())
    }

    async fn delete_testimonial(&self, id: &str) -> Result<bool, StoreError> {
        // shift_remove keeps the remaining entries in insertion order.
        Ok(self
            .tables
            .write()
            .await
            .testimonials
            .shift_remove(id)
            .is_some())
    }

    async fn count_testimonials(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.testimonials.len() as i64)
    }

    async fn create_portfolio_item(
        &self,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, StoreError> {
        let item = PortfolioItem {
            id: new_entity_id(),
            title: input.title.clone(),
            category: input.category.clone(),
            line_art_url: input.line_art_url.clone(),
            full_art_url: input.full_art_url.clone(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .portfolio_items
            .insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        Ok(newest_first(&self.tables.read().await.portfolio_items))
    }

    async fn get_portfolio_item(&self, id: &str) -> Result<Option<PortfolioItem>, StoreError> {
        Ok(self.tables.read().await.portfolio_items.get(id).cloned())
    }

    async fn delete_portfolio_item(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self
            .tables
            .write()
            .await
            .portfolio_items
            .shift_remove(id)
            .is_some())
    }
}
