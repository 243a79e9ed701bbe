//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`schema`] - Per-entity field tables for JSON loading, validation and dumping
//! - [`resource`] - The service contract the generic handlers are written against
//! - [`pagination`] - Paging over any resource
//! - [`dto`] - Shared request/response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod resource;
pub mod routes;
pub mod schema;
