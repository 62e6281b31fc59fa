//! Best-effort testimonial prefill from social-media oEmbed endpoints.
//!
//! Extraction is a single attempt: no retries, no caching. Failure is an
//! expected outcome (Instagram in particular usually demands credentials
//! we do not have), and every [`ExtractError`] carries a message telling
//! the user to fill the testimonial in by hand.

pub mod error;
pub mod markup;
pub mod oembed;

use apexverse_core::platform::Platform;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::ExtractError;
pub use oembed::{OEmbedConfig, OEmbedExtractor};

/// Testimonial fields recovered from a public post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContent {
    pub author_name: String,
    pub author_handle: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
}

/// Source of prefilled testimonial content.
///
/// The HTTP layer holds this as `Arc<dyn ContentExtractor>` so tests can
/// swap in a canned implementation.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(
        &self,
        platform: Platform,
        post_url: &str,
    ) -> Result<ExtractedContent, ExtractError>;
}
