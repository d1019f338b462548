//! Integration tests for locale resolution and selection.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn locale_defaults_to_english(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/locale").await).await;

    assert_eq!(json["data"]["locale"], "en");
    assert_eq!(json["data"]["default_locale"], "en");
    assert_eq!(json["data"]["supported"], json!(["en", "vi"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn accept_language_header_is_honored(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .uri("/locale")
        .header("accept-language", "vi-VN,vi;q=0.9,en;q=0.8")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "vi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cookie_beats_accept_language(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .uri("/locale")
        .header("accept-language", "vi-VN")
        .header("cookie", "locale=en")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "en");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn setting_locale_returns_cookie(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(app, "/locale", json!({ "locale": "vi" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("set-cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("locale=vi;"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "vi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unsupported_locale_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(app, "/locale", json!({ "locale": "fr" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
