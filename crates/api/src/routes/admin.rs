//! Route definitions for the `/admin` back-office.
//!
//! Every handler behind these routes takes [`RequireAdmin`], so the
//! role check lives at the handler signature rather than a layer.
//!
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{categories, comments, media, posts, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        // Posts (pages, blog entries, characters).
        .route("/posts", get(posts::list).post(posts::create))
        .route(
            "/posts/{id}",
            get(posts::get_by_id).put(posts::update).delete(posts::delete),
        )
        // Categories.
        .route("/categories", get(categories::list).post(categories::create))
        .route("/categories/tree", get(categories::tree))
        .route(
            "/categories/{id}",
            get(categories::get_by_id)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/categories/{id}/breadcrumbs", get(categories::breadcrumbs))
        // Comment moderation.
        .route("/comments", get(comments::list_all))
        .route("/comments/{id}", delete(comments::delete))
        // Users.
        .route("/users", get(users::list))
        .route("/users/{id}", get(users::get_by_id).put(users::update))
        .route("/users/{id}/reset-password", post(users::reset_password))
        // Media library.
        .route("/media", get(media::list))
        .route("/media/upload", post(media::upload))
        .route("/media/{name}", delete(media::remove))
}
