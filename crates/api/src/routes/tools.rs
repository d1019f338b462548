//! Route definitions for the `/api` utility endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{dictionary, media};
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /upload      -> block-editor image upload (admin)
/// GET  /dictionary  -> dictionary lookup proxy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(media::editor_upload))
        .route("/dictionary", get(dictionary::lookup))
}
