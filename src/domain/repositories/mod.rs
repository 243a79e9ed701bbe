//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! Every write method is one unit of work: the implementation opens a
//! transaction, performs the write and commits before returning. An error
//! drops the transaction, which rolls it back.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD operations
//! - [`BankRepository`] - Bank CRUD operations
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod bank_repository;
pub mod token_repository;
pub mod user_repository;

pub use bank_repository::BankRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use bank_repository::MockBankRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
