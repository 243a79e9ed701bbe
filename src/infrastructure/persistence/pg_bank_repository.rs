//! PostgreSQL implementation of bank repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Bank, BankPatch, NewBank};
use crate::domain::repositories::BankRepository;
use crate::error::AppError;
use crate::utils::db_error::map_write_error;

const UNIQUE_CONSTRAINTS: &[(&str, &str, &str)] =
    &[("banks_name_key", "name", "Bank with this name already exists.")];

#[derive(sqlx::FromRow)]
struct BankRow {
    id: i64,
    name: String,
}

impl From<BankRow> for Bank {
    fn from(row: BankRow) -> Self {
        Bank::new(row.id, row.name)
    }
}

/// PostgreSQL repository for banks.
pub struct PgBankRepository {
    pool: Arc<PgPool>,
}

impl PgBankRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BankRepository for PgBankRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Bank>, AppError> {
        let row = sqlx::query_as::<_, BankRow>("SELECT id, name FROM banks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Bank::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM banks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Bank>, AppError> {
        let rows = sqlx::query_as::<_, BankRow>(
            "SELECT id, name FROM banks ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Bank::from).collect())
    }

    async fn create(&self, new_bank: NewBank) -> Result<Bank, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BankRow>(
            "INSERT INTO banks (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new_bank.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, UNIQUE_CONSTRAINTS))?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: BankPatch) -> Result<Option<Bank>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, BankRow>(
            "SELECT id, name FROM banks WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let mut bank = Bank::from(current);
        patch.apply(&mut bank);

        let row = sqlx::query_as::<_, BankRow>(
            "UPDATE banks SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&bank.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, UNIQUE_CONSTRAINTS))?;

        tx.commit().await?;
        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM banks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
