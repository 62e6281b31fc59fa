#![allow(dead_code)]

use std::sync::Arc;

use apexverse_api::config::ServerConfig;
use apexverse_api::router::build_app_router;
use apexverse_api::state::AppState;
use apexverse_core::platform::Platform;
use apexverse_db::models::contact::{ContactSubmission, CreateContactSubmission};
use apexverse_db::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use apexverse_db::models::testimonial::{CreateTestimonial, Testimonial};
use apexverse_db::{MemoryStore, Store, StoreError};
use apexverse_extract::{ContentExtractor, ExtractError, ExtractedContent, OEmbedConfig};
use apexverse_notify::ContactNotifier;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        request_timeout_secs: 30,
        max_body_bytes: 16 * 1024 * 1024,
        extract: OEmbedConfig::default(),
    }
}

/// Canned extractor: X posts always resolve, Instagram always wants auth.
pub struct StubExtractor;

#[async_trait]
impl ContentExtractor for StubExtractor {
    async fn extract(
        &self,
        platform: Platform,
        post_url: &str,
    ) -> Result<ExtractedContent, ExtractError> {
        match platform {
            Platform::X => Ok(ExtractedContent {
                author_name: "Jane Doe".to_string(),
                author_handle: Some("@jane".to_string()),
                content: format!("Loved the commission! {post_url}"),
                image_url: None,
            }),
            Platform::Instagram => Err(ExtractError::AuthRequired),
        }
    }
}

/// Store whose every operation fails the way an unreachable database does.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl Store for FailingStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create_contact_submission(
        &self,
        _input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        Err(unavailable())
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Err(unavailable())
    }

    async fn get_contact_submission(
        &self,
        _id: &str,
    ) -> Result<Option<ContactSubmission>, StoreError> {
        Err(unavailable())
    }

    async fn create_testimonial(
        &self,
        _input: &CreateTestimonial,
    ) -> Result<Testimonial, StoreError> {
        Err(unavailable())
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Err(unavailable())
    }

    async fn get_testimonial(&self, _id: &str) -> Result<Option<Testimonial>, StoreError> {
        Err(unavailable())
    }

    async fn delete_testimonial(&self, _id: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn count_testimonials(&self) -> Result<i64, StoreError> {
        Err(unavailable())
    }

    async fn create_portfolio_item(
        &self,
        _input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, StoreError> {
        Err(unavailable())
    }

    async fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        Err(unavailable())
    }

    async fn get_portfolio_item(&self, _id: &str) -> Result<Option<PortfolioItem>, StoreError> {
        Err(unavailable())
    }

    async fn delete_portfolio_item(&self, _id: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

/// Build the full application router over an empty in-memory store.
///
/// Uses the same builder as `main.rs`, so the middleware stack (CORS,
/// request ID, timeout, tracing, body limit) is exercised too.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Same as [`build_test_app`] over a caller-supplied store.
pub fn build_test_app_with_store(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        extractor: Arc::new(StubExtractor),
        notifier: ContactNotifier::log_only(),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string().into_bytes()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "apexverse-test-boundary";

/// One part of a multipart form. `filename: None` makes it a text field.
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &'a str, content_type: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            filename: Some("upload.bin"),
            content_type,
            data,
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            content_type: "text/plain",
            data: value.as_bytes(),
        }
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n\
                     Content-Type: {}\r\n\r\n",
                    part.name, part.content_type
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    part.name
                )
                .as_bytes(),
            ),
        }
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    post_raw(
        app,
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        multipart_body(parts),
    )
    .await
}
