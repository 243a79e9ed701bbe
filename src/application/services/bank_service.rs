//! Bank management service.

use crate::domain::entities::{Bank, BankPatch, NewBank};
use crate::domain::repositories::BankRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for bank CRUD operations.
pub struct BankService<R: BankRepository> {
    repository: Arc<R>,
}

impl<R: BankRepository> BankService<R> {
    /// Creates a new bank service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a bank by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the bank does not exist.
    pub async fn get_bank(&self, id: i64) -> Result<Bank, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn count_banks(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Returns one page of banks ordered by id.
    pub async fn list_banks(&self, offset: i64, limit: i64) -> Result<Vec<Bank>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Creates a bank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is already taken.
    pub async fn create_bank(&self, new_bank: NewBank) -> Result<Bank, AppError> {
        let bank = self.repository.create(new_bank).await?;
        tracing::info!(bank_id = bank.id, name = %bank.name, "Bank created");
        Ok(bank)
    }

    /// Applies a partial update. An empty patch leaves the bank unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the bank does not exist.
    /// Returns [`AppError::Validation`] if the new name is already taken.
    pub async fn update_bank(&self, id: i64, patch: BankPatch) -> Result<Bank, AppError> {
        let empty = patch.is_empty();
        let bank = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(bank_id = id, noop = empty, "Bank updated");
        Ok(bank)
    }

    /// Deletes a bank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the bank does not exist.
    pub async fn delete_bank(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(bank_id = id, "Bank deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("bank does not exist", json!({ "id": id }))
}
