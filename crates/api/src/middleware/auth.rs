//! JWT-based authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use taramind_core::error::CoreError;
use taramind_core::types::DbId;

use crate::auth::jwt::{decode_access_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated profile extracted from an `Authorization: Bearer <token>` header.
///
/// Use as an extractor parameter in any handler that requires a signed-in user:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(profile_id = user.profile_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The profile's database id (from `claims.sub`).
    pub profile_id: DbId,
    /// The profile's role name (`"admin"` or `"customer"`).
    pub role: String,
}

impl AuthUser {
    /// Extract and validate the bearer token from a header map.
    ///
    /// Handlers that want to customize the unauthenticated response (for
    /// example to localize it) call this directly instead of using the
    /// extractor, which rejects with a generic English message.
    pub fn from_headers(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Self, AppError> {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = decode_access_token(token, jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            profile_id: claims.sub,
            role: claims.role,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_headers(&parts.headers, &state.config.jwt)
    }
}
