//! Admin handlers for the `/admin/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taramind_core::error::CoreError;
use taramind_core::roles::{ROLE_ADMIN, ROLE_CUSTOMER};
use taramind_core::types::DbId;
use taramind_db::models::profile::{PublicProfile, UpdateProfile};
use taramind_db::repositories::{ProfileRepo, SessionRepo};

use crate::auth::password::{check_password_strength, hash_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct AdminResetPasswordRequest {
    pub password: String,
}

/// GET /admin/users
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PublicProfile>>>> {
    let profiles = ProfileRepo::list_all(&state.pool).await?;
    let public: Vec<PublicProfile> = profiles.into_iter().map(Into::into).collect();
    Ok(Json(DataResponse { data: public }))
}

/// GET /admin/users/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PublicProfile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// PUT /admin/users/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<PublicProfile>>> {
    if let Some(role) = &input.role {
        if role != ROLE_ADMIN && role != ROLE_CUSTOMER {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown role: {role}"
            ))));
        }
        // An admin demoting themselves mid-session would strand the UI.
        if admin.profile_id == id && role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Validation(
                "Cannot change your own role".into(),
            )));
        }
    }

    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;

    tracing::info!(profile_id = id, admin_id = admin.profile_id, "profile updated");
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// POST /admin/users/{id}/reset-password
///
/// Set a new password directly and revoke the user's sessions.
pub async fn reset_password(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AdminResetPasswordRequest>,
) -> AppResult<StatusCode> {
    check_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = ProfileRepo::update_password(&state.pool, id, &password_hash).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    tracing::info!(profile_id = id, admin_id = admin.profile_id, "password reset by admin");
    Ok(StatusCode::NO_CONTENT)
}
