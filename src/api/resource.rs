//! Generic resource contract.
//!
//! A resource is a named collection exposed at `/<collection>` (list, create)
//! and `/<collection>/{id}` (get, update, delete). [`ResourceService`] is the
//! seam the generic handlers in [`crate::api::handlers::resource`] are written
//! against; each entity service implements it once, pairing itself with the
//! [`Schema`] that validates and serializes its entity.

use async_trait::async_trait;

use crate::api::schema::{BankSchema, Schema, UserSchema};
use crate::application::services::{BankService, UserService};
use crate::domain::repositories::{BankRepository, UserRepository};
use crate::error::AppError;

pub type EntityOf<S> = <S as Schema>::Entity;
pub type InputOf<S> = <S as Schema>::Input;
pub type PatchOf<S> = <S as Schema>::Patch;

#[async_trait]
pub trait ResourceService: Send + Sync + 'static {
    type Schema: Schema;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entity has this id.
    async fn fetch(&self, id: i64) -> Result<EntityOf<Self::Schema>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Returns one slice of the collection in primary-key order.
    async fn slice(&self, offset: i64, limit: i64)
    -> Result<Vec<EntityOf<Self::Schema>>, AppError>;

    async fn create(&self, input: InputOf<Self::Schema>)
    -> Result<EntityOf<Self::Schema>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entity has this id.
    async fn update(
        &self,
        id: i64,
        patch: PatchOf<Self::Schema>,
    ) -> Result<EntityOf<Self::Schema>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entity has this id.
    async fn remove(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: BankRepository + 'static> ResourceService for BankService<R> {
    type Schema = BankSchema;

    async fn fetch(&self, id: i64) -> Result<EntityOf<BankSchema>, AppError> {
        self.get_bank(id).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.count_banks().await
    }

    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<EntityOf<BankSchema>>, AppError> {
        self.list_banks(offset, limit).await
    }

    async fn create(&self, input: InputOf<BankSchema>) -> Result<EntityOf<BankSchema>, AppError> {
        self.create_bank(input.into()).await
    }

    async fn update(
        &self,
        id: i64,
        patch: PatchOf<BankSchema>,
    ) -> Result<EntityOf<BankSchema>, AppError> {
        self.update_bank(id, patch.into()).await
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        self.delete_bank(id).await
    }
}

#[async_trait]
impl<R: UserRepository + 'static> ResourceService for UserService<R> {
    type Schema = UserSchema;

    async fn fetch(&self, id: i64) -> Result<EntityOf<UserSchema>, AppError> {
        self.get_user(id).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.count_users().await
    }

    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<EntityOf<UserSchema>>, AppError> {
        self.list_users(offset, limit).await
    }

    async fn create(&self, input: InputOf<UserSchema>) -> Result<EntityOf<UserSchema>, AppError> {
        self.create_user(input.into()).await
    }

    async fn update(
        &self,
        id: i64,
        patch: PatchOf<UserSchema>,
    ) -> Result<EntityOf<UserSchema>, AppError> {
        self.update_user(id, patch.into()).await
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        self.delete_user(id).await
    }
}
