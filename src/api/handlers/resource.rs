//! Generic CRUD handlers.
//!
//! Every handler is generic over a [`ResourceService`] and pulls it out of the
//! application state with `State<Arc<R>>`, so one set of functions serves
//! `/users` and `/banks` alike. See [`crate::api::routes::resource_routes`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        OriginalUri, Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Map, Value};

use crate::api::dto::pagination::{Page, PageLimits, PaginationParams};
use crate::api::pagination::paginate;
use crate::api::resource::{EntityOf, ResourceService};
use crate::api::schema::{self, Schema};
use crate::error::AppError;

/// `{"msg": "<name> <action>"}` plus, when given, `{"<name>": <dump>}`.
fn envelope<S: Schema>(msg: Option<&str>, entity: Option<&EntityOf<S>>) -> Json<Value> {
    let mut body = Map::new();
    if let Some(action) = msg {
        body.insert("msg".into(), Value::String(format!("{} {action}", S::NAME)));
    }
    if let Some(entity) = entity {
        body.insert(S::NAME.into(), schema::dump::<S>(entity));
    }
    Json(Value::Object(body))
}

/// Fetches one entity.
///
/// # Endpoint
///
/// `GET /api/v1/<collection>/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown or not an integer.
pub async fn get_handler<R: ResourceService>(
    State(service): State<Arc<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let entity = service.fetch(id).await?;

    Ok(envelope::<R::Schema>(None, Some(&entity)))
}

/// Lists one page of the collection, ordered by id.
///
/// # Endpoint
///
/// `GET /api/v1/<collection>?page=1&per_page=50`
///
/// # Errors
///
/// Returns 400 for invalid paging parameters.
/// Returns 404 for a page past the end of a non-empty collection.
pub async fn list_handler<R: ResourceService>(
    State(service): State<Arc<R>>,
    State(limits): State<PageLimits>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Page>, AppError> {
    let Query(params) = query?;
    let request = params.resolve(limits)?;

    let page = paginate(service.as_ref(), request, uri.path()).await?;

    Ok(Json(page))
}

/// Creates an entity from a full body.
///
/// # Endpoint
///
/// `POST /api/v1/<collection>`
///
/// # Errors
///
/// Returns 400 with per-field messages if the body does not validate or a
/// unique field is already taken.
pub async fn create_handler<R: ResourceService>(
    State(service): State<Arc<R>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let input = schema::load::<R::Schema>(&body)?;

    let entity = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope::<R::Schema>(Some("created"), Some(&entity)),
    ))
}

/// Partially updates an entity.
///
/// # Endpoint
///
/// `PUT /api/v1/<collection>/{id}`
///
/// Absent fields keep their values; `{}` is a no-op.
///
/// # Errors
///
/// Returns 404 if the id is unknown.
/// Returns 400 with per-field messages if the body does not validate.
pub async fn update_handler<R: ResourceService>(
    State(service): State<Arc<R>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let Json(body) = body?;
    let patch = schema::load_partial::<R::Schema>(&body)?;

    let entity = service.update(id, patch).await?;

    Ok(envelope::<R::Schema>(Some("updated"), Some(&entity)))
}

/// Deletes an entity.
///
/// # Endpoint
///
/// `DELETE /api/v1/<collection>/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown.
pub async fn delete_handler<R: ResourceService>(
    State(service): State<Arc<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    service.remove(id).await?;

    Ok(envelope::<R::Schema>(Some("deleted"), None))
}
