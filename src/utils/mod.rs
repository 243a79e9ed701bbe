//! Helpers shared across layers.
//!
//! - [`password`] - Password hashing
//! - [`db_error`] - Unique-constraint violations mapped to field errors

pub mod db_error;
pub mod password;
