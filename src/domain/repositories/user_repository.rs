//! Repository trait for user management.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by its primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Counts all users.
    async fn count(&self) -> Result<i64, AppError>;

    /// Returns one slice of users ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError>;

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on `username` or `email` if either is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Locks the user, merges `patch` into it and writes it back.
    ///
    /// Returns `Ok(None)` if no user has this id.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Deletes a user. Returns `false` if no user has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
