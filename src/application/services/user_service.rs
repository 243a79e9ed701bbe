//! User management service.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;
use serde_json::json;
use std::sync::Arc;

/// Raw user input before the password is hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub active: bool,
}

/// Raw partial update before the password is hashed.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub active: Option<bool>,
}

/// Service for user CRUD operations.
///
/// Raw passwords stop here: they are hashed before reaching the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_username(username).await
    }

    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Returns one page of users ordered by id.
    pub async fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Creates a user, hashing the password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or email is taken.
    pub async fn create_user(&self, input: CreateUser) -> Result<User, AppError> {
        let new_user = NewUser {
            username: input.username,
            email: input.email,
            password_hash: hash_off_runtime(input.password).await?,
            active: input.active,
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Applies a partial update, hashing a new password if one is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if the new username or email is taken.
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> Result<User, AppError> {
        let password_hash = match input.password {
            Some(raw) => Some(hash_off_runtime(raw).await?),
            None => None,
        };
        let patch = UserPatch {
            username: input.username,
            email: input.email,
            password_hash,
            active: input.active,
        };
        let empty = patch.is_empty();

        let user = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(user_id = id, noop = empty, "User updated");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

/// Runs PBKDF2 on the blocking pool so async workers stay free.
async fn hash_off_runtime(raw: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&raw))
        .await
        .map_err(|e| {
            AppError::internal("Password hashing failed", json!({ "reason": e.to_string() }))
        })
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("user does not exist", json!({ "id": id }))
}
