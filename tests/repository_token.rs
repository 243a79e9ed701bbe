use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use weget::domain::repositories::TokenRepository;
use weget::error::AppError;
use weget::infrastructure::persistence::PgTokenRepository;

async fn column(pool: &PgPool, column: &str, id: i64) -> Option<DateTime<Utc>> {
    sqlx::query_scalar(&format!("SELECT {column} FROM api_tokens WHERE id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_create_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("test-token", "hash123").await.unwrap();

    assert_eq!(token.name, "test-token");
    assert_eq!(token.token_hash, "hash123");
    assert!(!token.is_revoked());
    assert!(token.last_used_at.is_none());
}

#[sqlx::test]
async fn test_create_token_duplicate_name(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("dup", "hash-a").await.unwrap();
    let result = repo.create_token("dup", "hash-b").await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_validate_token_valid(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("valid-token", "validhash").await.unwrap();

    assert!(repo.validate_token("validhash").await.unwrap());
}

#[sqlx::test]
async fn test_validate_token_invalid(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    assert!(!repo.validate_token("nonexistent").await.unwrap());
}

#[sqlx::test]
async fn test_validate_token_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("revoked-token", "revokedhash")
        .await
        .unwrap();
    repo.revoke_token(token.id).await.unwrap();

    assert!(!repo.validate_token("revokedhash").await.unwrap());
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    let token = repo
        .create_token("update-token", "updatehash")
        .await
        .unwrap();

    repo.update_last_used("updatehash").await.unwrap();

    assert!(column(&pool, "last_used_at", token.id).await.is_some());
}

#[sqlx::test]
async fn test_list_tokens(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("token1", "hash1").await.unwrap();
    repo.create_token("token2", "hash2").await.unwrap();
    repo.create_token("token3", "hash3").await.unwrap();

    let tokens = repo.list_tokens().await.unwrap();

    assert_eq!(tokens.len(), 3);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.create_token("find-by-id", "findhash").await.unwrap();

    let token = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(token.unwrap().name, "find-by-id");
    assert!(repo.find_by_id(created.id + 1000).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_name(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("unique-name", "namehash").await.unwrap();

    let token = repo.find_by_name("unique-name").await.unwrap();

    assert_eq!(token.unwrap().token_hash, "namehash");
    assert!(repo.find_by_name("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_revoke_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    let token = repo
        .create_token("revoke-test", "revokehash")
        .await
        .unwrap();

    assert!(repo.revoke_token(token.id).await.unwrap());
    assert!(column(&pool, "revoked_at", token.id).await.is_some());
}

#[sqlx::test]
async fn test_revoke_already_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("double-revoke", "doublehash")
        .await
        .unwrap();

    repo.revoke_token(token.id).await.unwrap();

    assert!(!repo.revoke_token(token.id).await.unwrap());
}
