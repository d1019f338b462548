//! Route definitions for the public content surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::{blog, comments, locale, wheel};
use crate::state::AppState;

/// Public routes mounted at the root.
///
/// `POST /blog/{slug}` is a comment-submission alias kept for older
/// clients that posted to the article URL itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/locale", get(locale::get).post(locale::set))
        .route("/pages", get(blog::list_pages))
        .route("/pages/{slug}", get(blog::get_page))
        .route("/casting", get(blog::list_casting))
        .route("/wheel", get(wheel::get_state).post(wheel::spin))
        .route("/blog", get(blog::list_blog))
        .route("/blog/{slug}", get(blog::get_post).post(comments::create))
        .route(
            "/blog/{slug}/comments",
            get(comments::list_for_post).post(comments::create),
        )
}
