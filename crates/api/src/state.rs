use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mailer::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taramind_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// S3 media store.
    pub media: taramind_storage::MediaStore,
    /// Outbound email sender.
    pub mailer: Arc<Mailer>,
    /// HTTP client for the dictionary proxy.
    pub http: reqwest::Client,
}
