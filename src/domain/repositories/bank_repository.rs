//! Repository trait for bank management.

use crate::domain::entities::{Bank, BankPatch, NewBank};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for banks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBankRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Finds a bank by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Bank>, AppError>;

    /// Counts all banks.
    async fn count(&self) -> Result<i64, AppError>;

    /// Returns one slice of banks ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Bank>, AppError>;

    /// Creates a new bank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the `name` field if the name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_bank: NewBank) -> Result<Bank, AppError>;

    /// Locks the bank, merges `patch` into it and writes it back.
    ///
    /// Returns `Ok(None)` if no bank has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the `name` field if the new name is taken.
    async fn update(&self, id: i64, patch: BankPatch) -> Result<Option<Bank>, AppError>;

    /// Deletes a bank. Returns `false` if no bank has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
