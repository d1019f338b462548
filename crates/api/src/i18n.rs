//! Per-request locale resolution.
//!
//! The resolved locale comes from the `locale` cookie when present and
//! supported, falling back to the `Accept-Language` primary subtag, then the
//! configured default. [`RequestLocale`] is infallible: every request gets a
//! locale.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::state::AppState;

/// Cookie name carrying the visitor's locale choice.
pub const LOCALE_COOKIE: &str = "locale";

/// Locale cookie lifetime: one year.
const LOCALE_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// The locale resolved for the current request.
#[derive(Debug, Clone)]
pub struct RequestLocale(pub String);

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestLocale(resolve_from_headers(
            &parts.headers,
            &state.config.locale,
        )))
    }
}

/// Resolve the locale from request headers against the configured set.
pub fn resolve_from_headers(
    headers: &HeaderMap,
    config: &taramind_core::locale::LocaleConfig,
) -> String {
    let cookie_locale = headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(cookie_value);
    let accept_language = headers.get("accept-language").and_then(|v| v.to_str().ok());

    config.resolve(cookie_locale.as_deref(), accept_language)
}

/// Build the `Set-Cookie` header value that persists a locale choice.
pub fn locale_cookie(locale: &str) -> String {
    format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

/// Find the locale cookie's value inside a raw `Cookie` header.
fn cookie_value(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == LOCALE_COOKIE).then(|| value.trim().to_string())
    })
}
