#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use weget::api::dto::pagination::PageLimits;
use weget::application::services::auth_service::sign_token;
use weget::routes::router;
use weget::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-token-value";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET.to_string(), PageLimits::default())
}

/// Stores a token the way `admin token create` does and returns its id.
pub async fn create_test_token(pool: &PgPool, name: &str, raw: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO api_tokens (name, token_hash) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(sign_token(TEST_SECRET, raw))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_bank(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO banks (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a user row directly; `password` is stored as given.
pub async fn create_test_user(pool: &PgPool, username: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, 'x') RETURNING id",
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Full application router with a valid bearer token preinstalled.
pub async fn make_server(pool: PgPool) -> TestServer {
    create_test_token(&pool, "test", TEST_TOKEN).await;

    let state = create_test_state(pool);
    let mut server = TestServer::new(router(state)).unwrap();
    server.add_header(
        axum::http::header::AUTHORIZATION,
        axum::http::HeaderValue::from_str(&format!("Bearer {TEST_TOKEN}")).unwrap(),
    );
    server
}

/// Application router without any credentials.
pub fn make_anonymous_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
