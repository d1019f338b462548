//! Admin handlers for the `/admin/categories` resource, including the
//! nested tree and breadcrumb views.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taramind_core::error::CoreError;
use taramind_core::taxonomy::{breadcrumb_ancestors, build_tree, TreeNode};
use taramind_core::types::DbId;
use taramind_db::models::category::{Category, CreateCategory, UpdateCategory};
use taramind_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::posts::derive_slug;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/categories -- flat list, newest first.
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /admin/categories/tree -- the full nested hierarchy.
pub async fn tree(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TreeNode<Category>>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    let tree = build_tree(&categories, None);
    Ok(Json(DataResponse { data: tree }))
}

/// GET /admin/categories/{id}/breadcrumbs -- ancestor trail, root first,
/// excluding the category itself.
pub async fn breadcrumbs(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    let leaf = categories
        .iter()
        .find(|c| c.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let trail: Vec<Category> = breadcrumb_ancestors(leaf, &categories)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data: trail }))
}

/// GET /admin/categories/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category =
        CategoryRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            }))?;
    Ok(Json(DataResponse { data: category }))
}

/// POST /admin/categories
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }

    let slug = derive_slug(input.slug.as_deref(), &input.name)?;
    let category = CategoryRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        category_id = category.id,
        admin_id = user.profile_id,
        "category created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /admin/categories/{id}
///
/// Full replacement: `parent_id: null` re-roots the category.
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    if input.parent_id == Some(id) {
        return Err(AppError::Core(CoreError::Validation(
            "A category cannot be its own parent".into(),
        )));
    }

    let slug = derive_slug(input.slug.as_deref(), &input.name)?;
    let category = CategoryRepo::update(&state.pool, id, &input, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, admin_id = user.profile_id, "category updated");
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /admin/categories/{id}
///
/// Children of the deleted category keep their `parent_id` and become
/// dangling; tree builds simply stop descending through them.
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(category_id = id, admin_id = user.profile_id, "category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
