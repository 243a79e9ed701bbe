//! HTTP request handlers for API endpoints.
//!
//! [`resource`] holds the CRUD handlers shared by every collection.

pub mod health;
pub mod resource;

pub use health::health_handler;
