//! Integration tests for the comment gate: authentication, throttling,
//! and localized rejections.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, seed_admin, seed_customer, send_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn seed_post(pool: &PgPool) -> String {
    let (_, token) = seed_admin(pool).await;
    let app = common::build_test_app(pool.clone()).await;
    let response = send_json(
        app,
        "POST",
        "/admin/posts",
        Some(&token),
        json!({ "title": "Commented Post", "kind": "blog", "body": "<p>x</p>" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["slug"]
        .as_str()
        .unwrap()
        .to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_comment_rejected_with_localized_message(pool: PgPool) {
    let slug = seed_post(&pool).await;

    let app = common::build_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri(format!("/blog/{slug}/comments"))
        .header("content-type", "application/json")
        .header("accept-language", "vi-VN,vi;q=0.9")
        .body(Body::from(json!({ "comment_text": "hay quá" }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Bạn cần đăng nhập để bình luận");

    // Without a Vietnamese hint the message falls back to English.
    let app = common::build_test_app(pool).await;
    let response = send_json(
        app,
        "POST",
        &format!("/blog/{slug}/comments"),
        None,
        json!({ "comment_text": "nice" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You need to log in to comment");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_created_then_throttled(pool: PgPool) {
    let slug = seed_post(&pool).await;
    let (customer_id, token) = seed_customer(&pool).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = send_json(
        app,
        "POST",
        &format!("/blog/{slug}/comments"),
        Some(&token),
        json!({ "comment_text": "first!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["comment_text"], "first!");
    assert_eq!(json["data"]["user_id"], customer_id);

    // A second comment inside the window is throttled with a
    // seconds-remaining message.
    let app = common::build_test_app(pool.clone()).await;
    let response = send_json(
        app,
        "POST",
        &format!("/blog/{slug}/comments"),
        Some(&token),
        json!({ "comment_text": "second!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("second(s)") || message.contains("giây"),
        "throttle message should state the wait: {message}"
    );

    // Only the first comment landed.
    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, &format!("/blog/{slug}/comments")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_listing_includes_author_names(pool: PgPool) {
    let slug = seed_post(&pool).await;
    let (_, token) = seed_customer(&pool).await;

    let app = common::build_test_app(pool.clone()).await;
    send_json(
        app,
        "POST",
        &format!("/blog/{slug}/comments"),
        Some(&token),
        json!({ "comment_text": "with a name" }),
    )
    .await;

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, &format!("/blog/{slug}/comments")).await).await;
    let comments = json["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["author_name"], "Test customer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_on_unknown_post_is_localized_404(pool: PgPool) {
    let (_, token) = seed_customer(&pool).await;

    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .method("POST")
        .uri("/blog/khong-ton-tai/comments")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .header("cookie", "locale=vi")
        .body(Body::from(json!({ "comment_text": "?" }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Không tìm thấy bài viết");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_comment_rejected(pool: PgPool) {
    let slug = seed_post(&pool).await;
    let (_, token) = seed_customer(&pool).await;

    let app = common::build_test_app(pool).await;
    let response = send_json(
        app,
        "POST",
        &format!("/blog/{slug}/comments"),
        Some(&token),
        json!({ "comment_text": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_url_alias_accepts_comments(pool: PgPool) {
    let slug = seed_post(&pool).await;
    let (_, token) = seed_customer(&pool).await;

    let app = common::build_test_app(pool).await;
    let response = send_json(
        app,
        "POST",
        &format!("/blog/{slug}"),
        Some(&token),
        json!({ "comment_text": "via the alias" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
