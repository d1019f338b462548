//! Shared harness for API integration tests.
//!
//! Builds the real router via `build_app_router` so every test exercises
//! the production middleware stack. The media store points at a
//! localhost endpoint that is never contacted by these tests, and the
//! mailer runs disabled (links are logged, not sent).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use taramind_api::auth::jwt::{issue_access_token, JwtConfig};
use taramind_api::auth::password::hash_password;
use taramind_api::config::ServerConfig;
use taramind_api::mailer::{Mailer, MailerConfig};
use taramind_api::router::build_app_router;
use taramind_api::state::AppState;
use taramind_core::types::DbId;
use taramind_db::models::profile::CreateProfile;
use taramind_db::repositories::ProfileRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: test_jwt_config(),
        locale: taramind_core::locale::LocaleConfig::default(),
        mailer: disabled_mailer_config(),
        dictionary_base_url: "http://127.0.0.1:1/dict".to_string(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-not-for-production".to_string(),
        access_expiry_mins: 15,
        refresh_expiry_days: 30,
        one_time_token_expiry_hours: 24,
    }
}

fn disabled_mailer_config() -> MailerConfig {
    MailerConfig {
        smtp_host: None,
        smtp_port: 587,
        smtp_username: None,
        smtp_password: None,
        from_name: "Taramind".to_string(),
        from_email: "noreply@localhost".to_string(),
        public_base_url: "http://localhost:3000".to_string(),
    }
}

/// Build the full application router against the given pool.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let storage_config = taramind_storage::StorageConfig {
        bucket: "test-bucket".to_string(),
        region: "us-east-1".to_string(),
        // Never contacted; media endpoints are not exercised here.
        endpoint: Some("http://127.0.0.1:1".to_string()),
        public_base_url: "http://127.0.0.1:1".to_string(),
    };
    let media = taramind_storage::MediaStore::new(&storage_config).await;

    let mailer = Mailer::new(config.mailer.clone()).expect("test mailer");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
        mailer: Arc::new(mailer),
        http: reqwest::Client::new(),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a JSON request with the given method, optionally authenticated.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send an unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, None, body).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body as JSON")
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Insert a profile directly and return `(id, access_token)`.
pub async fn seed_profile(pool: &PgPool, email: &str, role: &str) -> (DbId, String) {
    let password_hash = hash_password("integration-password").expect("hash password");
    let profile = ProfileRepo::create(
        pool,
        &CreateProfile {
            email: email.to_string(),
            name: format!("Test {role}"),
            role: Some(role.to_string()),
            password_hash,
        },
    )
    .await
    .expect("seed profile");

    let token = issue_access_token(profile.id, role, &test_jwt_config()).expect("issue token");
    (profile.id, token)
}

/// Insert an admin profile and return `(id, access_token)`.
pub async fn seed_admin(pool: &PgPool) -> (DbId, String) {
    seed_profile(pool, "admin@example.com", "admin").await
}

/// Insert a customer profile and return `(id, access_token)`.
pub async fn seed_customer(pool: &PgPool) -> (DbId, String) {
    seed_profile(pool, "customer@example.com", "customer").await
}
