//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};

use crate::api::handlers::resource::{
    create_handler, delete_handler, get_handler, list_handler, update_handler,
};
use crate::api::resource::ResourceService;
use crate::state::{AppState, Banks, Users};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /users`        - List users (paginated)
/// - `POST   /users`        - Create a user
/// - `GET    /users/{id}`   - Fetch a user
/// - `PUT    /users/{id}`   - Partially update a user
/// - `DELETE /users/{id}`   - Delete a user
/// - the same five routes under `/banks`
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Users>("/users"))
        .merge(resource_routes::<Banks>("/banks"))
}

/// Binds the generic CRUD handlers for `R` under `collection`.
pub fn resource_routes<R>(collection: &str) -> Router<AppState>
where
    R: ResourceService,
    Arc<R>: FromRef<AppState>,
{
    Router::new()
        .route(collection, get(list_handler::<R>).post(create_handler::<R>))
        .route(
            &format!("{collection}/{{id}}"),
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
}
