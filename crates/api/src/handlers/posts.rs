//! Admin handlers for the `/admin/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taramind_core::error::CoreError;
use taramind_core::slug::generate_slug;
use taramind_core::types::DbId;
use taramind_db::models::post::{ContentKind, CreatePost, Post, PostSummary, UpdatePost};
use taramind_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/posts`.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Which content kind to list; the admin UI has a screen per kind.
    pub kind: ContentKind,
}

/// GET /admin/posts?kind=blog|page
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> AppResult<Json<DataResponse<Vec<PostSummary>>>> {
    let posts = PostRepo::list_by_kind(&state.pool, query.kind).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /admin/posts
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }

    let slug = derive_slug(input.slug.as_deref(), &input.title)?;
    let post = PostRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(post_id = post.id, admin_id = user.profile_id, "post created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /admin/posts/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Post>>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(DataResponse { data: post }))
}

/// PUT /admin/posts/{id}
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePost>,
) -> AppResult<Json<DataResponse<Post>>> {
    // An explicitly empty slug means "re-derive from the title": the new
    // one when the update carries it, the stored one otherwise. An empty
    // string must never reach the database.
    if input.slug.as_deref().is_some_and(|s| s.trim().is_empty()) {
        let title = match input.title.as_deref() {
            Some(title) => title.to_string(),
            None => {
                PostRepo::find_by_id(&state.pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?
                    .title
            }
        };
        input.slug = Some(derive_slug(None, &title)?);
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, admin_id = user.profile_id, "post updated");
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /admin/posts/{id}
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(post_id = id, admin_id = user.profile_id, "post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Post", id }))
    }
}

/// Use the provided slug when non-empty, otherwise derive one from the title.
pub(crate) fn derive_slug(provided: Option<&str>, title: &str) -> Result<String, AppError> {
    let slug = match provided {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => generate_slug(title),
    };
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Could not derive a slug; provide one explicitly".into(),
        )));
    }
    Ok(slug)
}
