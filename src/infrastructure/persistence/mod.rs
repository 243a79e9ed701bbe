//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Rows are read into private `FromRow` structs and converted into domain
//! entities, so the domain layer never depends on SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgBankRepository`] - Bank storage
//! - [`PgTokenRepository`] - API token storage and validation
//!
//! [`verify_table`] checks at startup that an entity's columns exist.

pub mod pg_bank_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;
pub mod table_check;

pub use pg_bank_repository::PgBankRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
pub use table_check::verify_table;
