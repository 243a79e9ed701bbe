//! Collection paging over any [`ResourceService`].

use crate::api::dto::pagination::{Page, PageRequest};
use crate::api::resource::ResourceService;
use crate::api::schema;
use crate::error::AppError;

/// Loads one page of `service`'s collection.
///
/// The count and the slice are issued concurrently. `path` is the collection
/// path the `next`/`prev` links point at.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when the slice is empty and `page != 1`.
pub async fn paginate<R: ResourceService>(
    service: &R,
    request: PageRequest,
    path: &str,
) -> Result<Page, AppError> {
    let (total, rows) = tokio::try_join!(
        service.count(),
        service.slice(request.offset(), request.limit())
    )?;

    if rows.is_empty() && request.page != 1 {
        return Err(AppError::not_found(
            "Page out of range",
            serde_json::json!({ "page": request.page, "total": total }),
        ));
    }

    let results = rows.iter().map(schema::dump::<R::Schema>).collect();

    Ok(Page::new(request, total, results, path))
}
