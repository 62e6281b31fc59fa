use std::sync::Arc;

use apexverse_db::Store;
use apexverse_extract::ContentExtractor;
use apexverse_notify::ContactNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend chosen at startup (Postgres or in-memory).
    pub store: Arc<dyn Store>,
    /// oEmbed client used to prefill testimonials.
    pub extractor: Arc<dyn ContentExtractor>,
    /// Detached contact-form notifications.
    pub notifier: ContactNotifier,
    pub config: Arc<ServerConfig>,
}
