//! Handlers for the `/auth` resource: registration, login, token refresh,
//! logout, password recovery, and email verification callbacks.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use taramind_core::error::CoreError;
use taramind_core::types::DbId;
use taramind_db::models::profile::{CreateProfile, PublicProfile};
use taramind_db::models::session::CreateSession;
use taramind_db::models::token::TokenPurpose;
use taramind_db::repositories::{ProfileRepo, SessionRepo, TokenRepo};
use validator::Validate;

use crate::auth::jwt::{digest_token, issue_access_token, mint_opaque_token};
use crate::auth::password::{check_password_strength, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub name: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for `POST /auth/forgot-password`.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Query parameters for `GET /auth/callback`.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// `password_reset` or `email_verify`.
    #[serde(rename = "type")]
    pub token_type: String,
    pub token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: PublicProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a customer profile and send a verification email.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PublicProfile>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    check_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // Duplicate emails surface as a unique violation and map to 409.
    let profile = ProfileRepo::create(
        &state.pool,
        &CreateProfile {
            email: input.email.trim().to_lowercase(),
            name: input.name.trim().to_string(),
            role: None,
            password_hash,
        },
    )
    .await?;

    send_one_time_token(&state, profile.id, &profile.email, TokenPurpose::EmailVerify).await?;

    tracing::info!(profile_id = profile.id, "profile registered");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: profile.into(),
        }),
    ))
}

/// POST /auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let profile = ProfileRepo::find_by_email(&state.pool, &input.email.trim().to_lowercase())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &profile.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = create_auth_response(&state, profile).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
/// The presented token's session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = digest_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let profile = ProfileRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Profile no longer exists".into()))
        })?;

    let response = create_auth_response(&state, profile).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /auth/logout
///
/// Revoke every session for the authenticated profile. Returns 204.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, user.profile_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/forgot-password
///
/// Send a password-reset link when the email is known. Always returns
/// 202 so the endpoint cannot be used to probe for registered emails.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(input): Json<ForgotPasswordRequest>,
) -> AppResult<StatusCode> {
    let email = input.email.trim().to_lowercase();
    if let Some(profile) = ProfileRepo::find_by_email(&state.pool, &email).await? {
        send_one_time_token(&state, profile.id, &profile.email, TokenPurpose::PasswordReset)
            .await?;
    } else {
        tracing::debug!("password reset requested for unknown email");
    }
    Ok(StatusCode::ACCEPTED)
}

/// POST /auth/reset-password
///
/// Consume a valid reset token and set the new password. All existing
/// sessions are revoked.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    check_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let token_hash = digest_token(&input.token);
    let token = TokenRepo::find_valid(&state.pool, TokenPurpose::PasswordReset, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired reset token".into(),
            ))
        })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    ProfileRepo::update_password(&state.pool, token.user_id, &password_hash).await?;
    TokenRepo::mark_used(&state.pool, token.id).await?;
    SessionRepo::revoke_all_for_user(&state.pool, token.user_id).await?;

    tracing::info!(profile_id = token.user_id, "password reset completed");
    Ok(Json(DataResponse {
        data: json!({ "reset": true }),
    }))
}

/// GET /auth/callback?type=...&token=...
///
/// Landing endpoint for emailed links. `email_verify` tokens are consumed
/// and mark the profile verified; `password_reset` tokens are only checked
/// here (the client follows up with `POST /auth/reset-password`).
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let token_hash = digest_token(&query.token);

    match query.token_type.as_str() {
        "email_verify" => {
            let token = TokenRepo::find_valid(&state.pool, TokenPurpose::EmailVerify, &token_hash)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid or expired verification token".into(),
                    ))
                })?;

            ProfileRepo::mark_email_verified(&state.pool, token.user_id).await?;
            TokenRepo::mark_used(&state.pool, token.id).await?;

            tracing::info!(profile_id = token.user_id, "email verified");
            Ok(Json(DataResponse {
                data: json!({ "verified": true }),
            }))
        }
        "password_reset" => {
            TokenRepo::find_valid(&state.pool, TokenPurpose::PasswordReset, &token_hash)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid or expired reset token".into(),
                    ))
                })?;
            Ok(Json(DataResponse {
                data: json!({ "valid": true }),
            }))
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown callback type: {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    profile: taramind_db::models::profile::Profile,
) -> AppResult<AuthResponse> {
    let access_token = issue_access_token(profile.id, &profile.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = mint_opaque_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.jwt.refresh_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: profile.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_expiry_mins * 60,
        user: profile.into(),
    })
}

/// Mint an opaque token, persist its hash, and email the matching link.
async fn send_one_time_token(
    state: &AppState,
    profile_id: DbId,
    email: &str,
    purpose: TokenPurpose,
) -> AppResult<()> {
    let (plaintext, hash) = mint_opaque_token();
    let expires_at =
        Utc::now() + chrono::Duration::hours(state.config.jwt.one_time_token_expiry_hours);

    TokenRepo::create(&state.pool, profile_id, purpose, &hash, expires_at).await?;

    match purpose {
        TokenPurpose::PasswordReset => state.mailer.send_password_reset(email, &plaintext).await,
        TokenPurpose::EmailVerify => state.mailer.send_email_verification(email, &plaintext).await,
    }
}
