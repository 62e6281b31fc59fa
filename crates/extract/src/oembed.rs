//! oEmbed client for X and Instagram posts.

use std::time::Duration;

use apexverse_core::platform::Platform;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::error::ExtractError;
use crate::markup::{handle_from_profile_url, tweet_text};
use crate::{ContentExtractor, ExtractedContent};

/// Public oEmbed endpoint for X posts.
pub const DEFAULT_X_ENDPOINT: &str = "https://publish.twitter.com/oembed";

/// Public oEmbed endpoint for Instagram posts. Usually answers with a login
/// page unless the request carries a Graph API token.
pub const DEFAULT_INSTAGRAM_ENDPOINT: &str = "https://api.instagram.com/oembed";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Author name used when the payload omits one.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Separator Instagram puts between the author and caption in `title`.
const INSTAGRAM_TITLE_SEPARATOR: &str = " on Instagram: ";

/// Endpoint and timeout settings for [`OEmbedExtractor`].
#[derive(Debug, Clone)]
pub struct OEmbedConfig {
    pub x_endpoint: String,
    pub instagram_endpoint: String,
    pub timeout: Duration,
}

impl Default for OEmbedConfig {
    fn default() -> Self {
        Self {
            x_endpoint: DEFAULT_X_ENDPOINT.to_string(),
            instagram_endpoint: DEFAULT_INSTAGRAM_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OEmbedConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `X_OEMBED_URL`         | `https://publish.twitter.com/oembed`  |
    /// | `INSTAGRAM_OEMBED_URL` | `https://api.instagram.com/oembed`    |
    /// | `EXTRACT_TIMEOUT_SECS` | `10`                                  |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            x_endpoint: std::env::var("X_OEMBED_URL").unwrap_or(defaults.x_endpoint),
            instagram_endpoint: std::env::var("INSTAGRAM_OEMBED_URL")
                .unwrap_or(defaults.instagram_endpoint),
            timeout: std::env::var("EXTRACT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Subset of the oEmbed response fields we read.
#[derive(Debug, Default, Deserialize)]
struct OEmbedPayload {
    author_name: Option<String>,
    author_url: Option<String>,
    html: Option<String>,
    title: Option<String>,
    thumbnail_url: Option<String>,
}

/// [`ContentExtractor`] that queries public oEmbed endpoints.
pub struct OEmbedExtractor {
    client: reqwest::Client,
    config: OEmbedConfig,
}

impl OEmbedExtractor {
    pub fn new(config: OEmbedConfig) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    async fn fetch(&self, endpoint: &str, post_url: &str) -> Result<reqwest::Response, ExtractError> {
        Ok(self
            .client
            .get(endpoint)
            .query(&[("url", post_url)])
            .send()
            .await?)
    }

    async fn extract_x(&self, post_url: &str) -> Result<ExtractedContent, ExtractError> {
        let response = self.fetch(&self.config.x_endpoint, post_url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Upstream {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        parse_x_payload(&body)
    }

    async fn extract_instagram(&self, post_url: &str) -> Result<ExtractedContent, ExtractError> {
        let response = self.fetch(&self.config.instagram_endpoint, post_url).await?;

        // Instagram serves its login page, not an error status, when it
        // wants credentials. Check this before the status code.
        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("text/html"));
        if is_html {
            return Err(ExtractError::AuthRequired);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Upstream {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        parse_instagram_payload(&body)
    }
}

#[async_trait]
impl ContentExtractor for OEmbedExtractor {
    async fn extract(
        &self,
        platform: Platform,
        post_url: &str,
    ) -> Result<ExtractedContent, ExtractError> {
        let result = match platform {
            Platform::X => self.extract_x(post_url).await,
            Platform::Instagram => self.extract_instagram(post_url).await,
        };
        match &result {
            Ok(_) => tracing::debug!(%platform, post_url, "oEmbed extraction succeeded"),
            Err(e) => tracing::warn!(%platform, post_url, error = %e, "oEmbed extraction failed"),
        }
        result
    }
}

fn decode_payload(body: &str) -> Result<OEmbedPayload, ExtractError> {
    serde_json::from_str(body).map_err(|e| ExtractError::Malformed(e.to_string()))
}

fn author_name_or_unknown(name: Option<String>) -> String {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Turn an X oEmbed JSON body into testimonial fields.
pub fn parse_x_payload(body: &str) -> Result<ExtractedContent, ExtractError> {
    let payload = decode_payload(body)?;
    Ok(ExtractedContent {
        author_name: author_name_or_unknown(payload.author_name),
        author_handle: payload.author_url.as_deref().and_then(handle_from_profile_url),
        content: payload.html.as_deref().map(tweet_text).unwrap_or_default(),
        image_url: None,
    })
}

/// Turn an Instagram oEmbed JSON body into testimonial fields.
///
/// The caption lives in `title` after `"<author> on Instagram: "`.
pub fn parse_instagram_payload(body: &str) -> Result<ExtractedContent, ExtractError> {
    let payload = decode_payload(body)?;
    let content = payload
        .title
        .as_deref()
        .map(|title| match title.split_once(INSTAGRAM_TITLE_SEPARATOR) {
            Some((_, caption)) => caption.replace('"', ""),
            None => title.to_string(),
        })
        .unwrap_or_default();

    Ok(ExtractedContent {
        author_name: author_name_or_unknown(payload.author_name),
        author_handle: payload.author_url.as_deref().and_then(handle_from_profile_url),
        content: content.trim().to_string(),
        image_url: payload.thumbnail_url.filter(|u| !u.is_empty()),
    })
}
