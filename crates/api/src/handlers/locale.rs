//! Locale inspection and selection handlers.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use taramind_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::i18n::{locale_cookie, RequestLocale};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /locale`.
#[derive(Debug, Serialize)]
pub struct LocaleInfo {
    /// The locale resolved for this request.
    pub locale: String,
    pub supported: Vec<String>,
    pub default_locale: String,
}

/// Request body for `POST /locale`.
#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

/// GET /locale -- the resolved locale and the supported set.
pub async fn get(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Json<DataResponse<LocaleInfo>> {
    Json(DataResponse {
        data: LocaleInfo {
            locale,
            supported: state.config.locale.supported.clone(),
            default_locale: state.config.locale.default_locale.clone(),
        },
    })
}

/// POST /locale -- persist a locale choice via cookie.
pub async fn set(
    State(state): State<AppState>,
    Json(input): Json<SetLocaleRequest>,
) -> AppResult<(HeaderMap, Json<DataResponse<LocaleInfo>>)> {
    if !state.config.locale.is_supported(&input.locale) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unsupported locale: {}",
            input.locale
        ))));
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        locale_cookie(&input.locale)
            .parse()
            .map_err(|e| AppError::InternalError(format!("cookie header: {e}")))?,
    );

    Ok((
        headers,
        Json(DataResponse {
            data: LocaleInfo {
                locale: input.locale,
                supported: state.config.locale.supported.clone(),
                default_locale: state.config.locale.default_locale.clone(),
            },
        }),
    ))
}
