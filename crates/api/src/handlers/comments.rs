//! Handlers for blog comments: the public listing and the gated
//! submission path.
//!
//! Submission is the one place the API speaks the visitor's language:
//! the sign-in requirement, the unknown-post case, and the throttle
//! message are all localized before they leave the server.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use taramind_core::error::CoreError;
use taramind_core::locale::messages;
use taramind_core::rate_limit::seconds_left;
use taramind_core::types::DbId;
use taramind_db::models::comment::{Comment, CommentWithAuthor, CommentWithContext, CreateComment};
use taramind_db::models::post::ContentKind;
use taramind_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::i18n::RequestLocale;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /blog/{slug}/comments -- comments with author names, newest first.
pub async fn list_for_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<CommentWithAuthor>>>> {
    let post = PostRepo::find_by_slug(&state.pool, ContentKind::Blog, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post not found: {slug}")))?;

    let comments = CommentRepo::list_for_post(&state.pool, post.id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /blog/{slug}/comments -- submit a comment.
///
/// Requires a signed-in user and enforces the per-user throttle window.
/// Rejections carry a message in the request's resolved locale.
pub async fn create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    RequestLocale(locale): RequestLocale,
    headers: HeaderMap,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    // Auth is checked by hand so the rejection can be localized.
    let user = AuthUser::from_headers(&headers, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            messages::login_required(&locale).to_string(),
        ))
    })?;

    let text = input.comment_text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment text must not be empty".into(),
        )));
    }

    let post = PostRepo::find_by_slug(&state.pool, ContentKind::Blog, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(messages::post_not_found(&locale).to_string()))?;

    let inserted =
        CommentRepo::create_rate_limited(&state.pool, post.id, user.profile_id, text).await?;

    match inserted {
        Some(comment) => {
            tracing::info!(
                comment_id = comment.id,
                post_id = post.id,
                profile_id = user.profile_id,
                "comment posted"
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
        }
        None => {
            // Throttled: report how long the user has to wait.
            let latest =
                CommentRepo::latest_created_at_for_user(&state.pool, user.profile_id).await?;
            let message = match latest.and_then(|at| seconds_left(at, Utc::now())) {
                Some(secs) => messages::rate_limited(&locale, secs),
                // The window elapsed between the insert attempt and now.
                None => messages::comment_failed(&locale).to_string(),
            };
            Err(AppError::Core(CoreError::RateLimited(message)))
        }
    }
}

/// GET /admin/comments -- every comment with post and author context.
pub async fn list_all(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CommentWithContext>>>> {
    let comments = CommentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// DELETE /admin/comments/{id}
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(comment_id = id, admin_id = user.profile_id, "comment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))
    }
}
