//! Data Transfer Objects for API requests and responses.
//!
//! Resource bodies are handled by [`crate::api::schema`]; this module holds the
//! shared shapes around them.

pub mod health;
pub mod pagination;
