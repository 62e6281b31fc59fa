use apexverse_extract::OEmbedConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Request body ceiling in bytes (default: 16 MiB). Must leave room for
    /// two maximal images in one multipart upload.
    pub max_body_bytes: usize,
    /// oEmbed endpoints and client timeout used for testimonial prefill.
    pub extract: OEmbedConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `DATABASE_URL`         | unset (in-memory storage)             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `MAX_BODY_BYTES`       | `16777216`                            |
    /// | `EXTRACT_TIMEOUT_SECS` | `10`                                  |
    /// | `X_OEMBED_URL`         | `https://publish.twitter.com/oembed`  |
    /// | `INSTAGRAM_OEMBED_URL` | `https://api.instagram.com/oembed`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_body_bytes: usize = std::env::var("MAX_BODY_BYTES")
            .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            max_body_bytes,
            extract: OEmbedConfig::from_env(),
        }
    }
}
