//! Integration tests for the public content surface: pages, casting,
//! the blog listing, and rendered post detail.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_admin, send_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_post(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone()).await;
    let response = send_json(app, "POST", "/admin/posts", Some(token), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blog_listing_excludes_characters_and_pages(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    create_post(
        &pool,
        &token,
        json!({ "title": "First Post", "kind": "blog", "body": "<p>hi</p>",
                "published_at": "2026-01-01T00:00:00Z" }),
    )
    .await;
    create_post(
        &pool,
        &token,
        json!({ "title": "A Character", "kind": "blog", "post_type": "character",
                "body": "<p>bio</p>" }),
    )
    .await;
    create_post(
        &pool,
        &token,
        json!({ "title": "About", "kind": "page", "body": "<p>about us</p>" }),
    )
    .await;

    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/blog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let posts = json["data"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "First Post");

    // The character shows up under /casting instead.
    let app = common::build_test_app(pool).await;
    let response = get(app, "/casting").await;
    let json = body_json(response).await;
    let characters = json["data"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["title"], "A Character");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn vietnamese_title_gets_folded_slug(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    let created = create_post(
        &pool,
        &token,
        json!({ "title": "Hệ Thống 999", "kind": "blog", "body": "<p>x</p>" }),
    )
    .await;
    assert_eq!(created["data"]["slug"], "he-thong-999");

    let app = common::build_test_app(pool).await;
    let response = get(app, "/blog/he-thong-999").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_detail_renders_block_document(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    let block_body = json!({
        "time": 1700000000,
        "blocks": [
            { "type": "header", "data": { "text": "Chapter <1>", "level": 2 } },
            { "type": "paragraph", "data": { "text": "Hello <b>world</b>" } },
            { "type": "mystery", "data": { "x": 1 } }
        ],
        "version": "2.28.0"
    })
    .to_string();

    create_post(
        &pool,
        &token,
        json!({ "title": "Rendered", "kind": "blog", "body": block_body }),
    )
    .await;

    let app = common::build_test_app(pool).await;
    let response = get(app, "/blog/rendered").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let html = json["data"]["body_html"].as_str().unwrap();
    // Header text is escaped, paragraph HTML passes through, the unknown
    // block is skipped.
    assert!(html.contains("Chapter &lt;1&gt;"));
    assert!(html.contains("Hello <b>world</b>"));
    assert!(!html.contains("mystery"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn raw_html_body_passes_through_verbatim(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    create_post(
        &pool,
        &token,
        json!({ "title": "Legacy", "kind": "blog", "body": "<div class=\"x\">legacy</div>" }),
    )
    .await;

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/blog/legacy").await).await;
    assert_eq!(json["data"]["body_html"], "<div class=\"x\">legacy</div>");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_detail_includes_category_breadcrumbs(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone()).await;
    let root = send_json(
        app,
        "POST",
        "/admin/categories",
        Some(&token),
        json!({ "name": "News" }),
    )
    .await;
    let root_id = body_json(root).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let child = send_json(
        app,
        "POST",
        "/admin/categories",
        Some(&token),
        json!({ "name": "Updates", "parent_id": root_id }),
    )
    .await;
    let child_id = body_json(child).await["data"]["id"].as_i64().unwrap();

    create_post(
        &pool,
        &token,
        json!({ "title": "Categorized", "kind": "blog", "body": "x",
                "category_id": child_id }),
    )
    .await;

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/blog/categorized").await).await;
    let crumbs = json["data"]["breadcrumbs"].as_array().unwrap();
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[0]["name"], "News");
    assert_eq!(crumbs[1]["name"], "Updates");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pages_are_ordered_and_fetchable_by_slug(pool: PgPool) {
    let (_, token) = seed_admin(&pool).await;

    create_post(
        &pool,
        &token,
        json!({ "title": "Contact", "kind": "page", "body": "c", "order_index": 2 }),
    )
    .await;
    create_post(
        &pool,
        &token,
        json!({ "title": "About", "kind": "page", "body": "a", "order_index": 1 }),
    )
    .await;

    let app = common::build_test_app(pool.clone()).await;
    let json = body_json(get(app, "/pages").await).await;
    let pages = json["data"].as_array().unwrap();
    assert_eq!(pages[0]["title"], "About");
    assert_eq!(pages[1]["title"], "Contact");

    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/pages/about").await;
    assert_eq!(response.status(), StatusCode::OK);

    // A blog slug is not reachable through the pages surface.
    let app = common::build_test_app(pool).await;
    let response = get(app, "/blog/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_slug_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/blog/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
