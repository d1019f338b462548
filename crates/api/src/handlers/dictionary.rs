//! Dictionary lookup proxy.
//!
//! The upstream dictionary serves HTML over plain HTTP, so browsers on
//! an HTTPS site cannot fetch it directly. This endpoint relays the
//! lookup server-side and returns the HTML body as-is.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/dictionary`.
#[derive(Debug, Deserialize)]
pub struct DictionaryQuery {
    pub word: String,
}

/// GET /api/dictionary?word=...
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<DictionaryQuery>,
) -> AppResult<Response> {
    let word = query.word.trim();
    if word.is_empty() {
        return Err(AppError::BadRequest("Missing word".into()));
    }

    let url = format!(
        "{}/{}",
        state.config.dictionary_base_url,
        urlencoding(word)
    );

    let response = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("dictionary request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "dictionary returned {}",
            response.status()
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::Upstream(format!("dictionary body read failed: {e}")))?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response())
}

/// Percent-encode a path segment. Unreserved characters pass through.
fn urlencoding(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoding_passes_unreserved() {
        assert_eq!(urlencoding("hello-world_1.2~"), "hello-world_1.2~");
    }

    #[test]
    fn test_urlencoding_escapes_utf8() {
        // "chào" -- the UTF-8 bytes of the accented characters get escaped.
        assert_eq!(urlencoding("chào"), "ch%C3%A0o");
        assert_eq!(urlencoding("a b"), "a%20b");
    }
}
