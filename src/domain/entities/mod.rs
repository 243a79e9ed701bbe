//! Core domain entities representing the persisted data model.
//!
//! Entities are plain data structures. Each one comes with:
//! - `NewX` - input for creating a new record
//! - `XPatch` - partial update, `None` fields are left unchanged
//!
//! # Entity Types
//!
//! - [`User`] - An account with a hashed password
//! - [`Bank`] - A bank identified by a unique name

pub mod bank;
pub mod user;

pub use bank::{Bank, BankPatch, NewBank};
pub use user::{NewUser, User, UserPatch};

/// A row type stored in its own table.
///
/// `COLUMNS` lists the persisted attributes; API schemas are checked against it
/// at startup.
pub trait Entity {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
}
