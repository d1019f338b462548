//! Integration tests for the casting wheel.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use taramind_db::repositories::ProfileRepo;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_spin_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = common::post_json(app, "/wheel", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Please login to spin the wheel");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_spin_persists_result_to_profile(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let (customer_id, token) = common::seed_customer(&pool).await;

    let response = common::send_json(app.clone(), "POST", "/wheel", Some(&token), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let name = body["data"]["name"].as_str().expect("item name");
    assert!(!name.is_empty());
    assert!(body["data"]["nervous_system_area"].is_string());

    let profile = ProfileRepo::find_by_id(&pool, customer_id)
        .await
        .expect("load profile")
        .expect("profile exists");
    assert_eq!(profile.signature.as_deref(), Some(name));

    // The state endpoint reports the stored result.
    let response = common::get_auth(app, "/wheel", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["has_spun"], json!(true));
    assert_eq!(body["data"]["result"]["name"], name);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_second_spin_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let (customer_id, token) = common::seed_customer(&pool).await;

    let response = common::send_json(app.clone(), "POST", "/wheel", Some(&token), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let first = ProfileRepo::find_by_id(&pool, customer_id)
        .await
        .expect("load profile")
        .expect("profile exists")
        .signature;

    let response = common::send_json(app, "POST", "/wheel", Some(&token), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "You have already spun the wheel");

    // The stored result is untouched by the rejected spin.
    let second = ProfileRepo::find_by_id(&pool, customer_id)
        .await
        .expect("load profile")
        .expect("profile exists")
        .signature;
    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_state_before_spinning(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let (_, token) = common::seed_customer(&pool).await;

    let response = common::get_auth(app.clone(), "/wheel", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["has_spun"], json!(false));
    assert!(body["data"]["result"].is_null());

    // Anonymous state requests are rejected like everything auth-gated.
    let response = common::get(app, "/wheel").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
