//! Handlers for the public content surface: site pages, the casting
//! listing, and the blog.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use taramind_core::taxonomy::breadcrumb_ancestors;
use taramind_core::types::{DbId, Timestamp};
use taramind_db::models::category::Category;
use taramind_db::models::post::{ContentKind, Post, PostSummary};
use taramind_db::repositories::{CategoryRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A post prepared for display: the stored body is rendered to HTML and
/// the category trail is attached.
#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub kind: ContentKind,
    pub post_type: String,
    /// Rendered HTML, safe to inject into the page body.
    pub body_html: String,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub published_at: Option<Timestamp>,
    /// Category trail from root to the post's own category, empty when
    /// the post is uncategorized.
    pub breadcrumbs: Vec<Category>,
}

/// GET /pages -- site pages ordered by their menu position.
pub async fn list_pages(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PostSummary>>>> {
    let pages = PostRepo::list_pages(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// GET /pages/{slug} -- a single site page, rendered.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<PostView>>> {
    let post = PostRepo::find_by_slug(&state.pool, ContentKind::Page, &slug)
        .await?
        .ok_or_else(|| slug_not_found("Page", &slug))?;

    let view = build_post_view(&state, post).await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /casting -- character entries for the casting campaign.
pub async fn list_casting(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PostSummary>>>> {
    let characters = PostRepo::list_characters(&state.pool).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /blog -- blog entries, newest first, character entries excluded.
pub async fn list_blog(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PostSummary>>>> {
    let posts = PostRepo::list_blog(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /blog/{slug} -- a single blog entry, rendered, with breadcrumbs.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<PostView>>> {
    let post = PostRepo::find_by_slug(&state.pool, ContentKind::Blog, &slug)
        .await?
        .ok_or_else(|| slug_not_found("Post", &slug))?;

    let view = build_post_view(&state, post).await?;
    Ok(Json(DataResponse { data: view }))
}

/// Render the body and resolve the category trail for a post.
pub(crate) async fn build_post_view(state: &AppState, post: Post) -> AppResult<PostView> {
    let breadcrumbs = match post.category_id {
        Some(category_id) => {
            let all = CategoryRepo::list_all(&state.pool).await?;
            match all.iter().find(|c| c.id == category_id) {
                Some(leaf) => {
                    let mut trail: Vec<Category> = breadcrumb_ancestors(leaf, &all)
                        .into_iter()
                        .cloned()
                        .collect();
                    trail.push(leaf.clone());
                    trail
                }
                // The category row was deleted after the post referenced it.
                None => Vec::new(),
            }
        }
        None => Vec::new(),
    };

    Ok(PostView {
        id: post.id,
        title: post.title,
        slug: post.slug,
        kind: post.kind,
        post_type: post.post_type,
        body_html: taramind_core::content::render(&post.body),
        category_id: post.category_id,
        featured_image: post.featured_image,
        published_at: post.published_at,
        breadcrumbs,
    })
}

fn slug_not_found(entity: &str, slug: &str) -> AppError {
    tracing::debug!(entity, slug, "content lookup missed");
    AppError::NotFound(format!("{entity} not found: {slug}"))
}
