//! Route definitions, one module per surface.
//!
//! ```text
//! /health                                   service health
//!
//! /auth/register                            register (public)
//! /auth/login                               login (public)
//! /auth/refresh                             refresh (public)
//! /auth/logout                              logout (requires auth)
//! /auth/forgot-password                     request reset link (public)
//! /auth/reset-password                      consume reset token (public)
//! /auth/callback                            emailed-link landing (public)
//! /logout                                   logout alias (requires auth)
//!
//! /locale                                   get / set locale
//! /pages                                    site pages
//! /pages/{slug}                             single page, rendered
//! /casting                                  character entries
//! /wheel                                    spin state (GET), spin once (POST)
//! /blog                                     blog listing
//! /blog/{slug}                              single post (GET), comment alias (POST)
//! /blog/{slug}/comments                     comment list (GET), submit (POST)
//!
//! /api/upload                               block-editor image upload (admin)
//! /api/dictionary                           dictionary proxy
//!
//! /admin/posts                              list (?kind=), create
//! /admin/posts/{id}                         get, update, delete
//! /admin/categories                         list, create
//! /admin/categories/tree                    nested hierarchy
//! /admin/categories/{id}                    get, update, delete
//! /admin/categories/{id}/breadcrumbs        ancestor trail
//! /admin/comments                           moderation list
//! /admin/comments/{id}                      delete
//! /admin/users                              list
//! /admin/users/{id}                         get, update
//! /admin/users/{id}/reset-password          set password directly
//! /admin/media                              bucket listing
//! /admin/media/upload                       multi-file upload
//! /admin/media/{name}                       delete object
//! ```

pub mod admin;
pub mod auth;
pub mod blog;
pub mod health;
pub mod tools;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Assemble every route group except `/health` (mounted separately so
/// probes bypass the API middleware ordering concerns).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        // Logout alias kept for clients that call it at the top level.
        .route("/logout", post(handlers::auth::logout))
        .merge(blog::router())
        .nest("/api", tools::router())
        .nest("/admin", admin::router())
}
