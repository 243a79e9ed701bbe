//! Pagination query parameters and the page envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, FieldErrors};

pub const DEFAULT_PER_PAGE: i64 = 50;
pub const MAX_PER_PAGE: i64 = 100;

/// Server-side bounds for `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: i64,
    pub max_per_page: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

/// Raw `?page=&per_page=` values.
///
/// Kept as strings so a non-integer value becomes a field error instead of a
/// generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl PaginationParams {
    /// Validates the parameters against `limits`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: `limits.default_per_page`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by parameter name if a value is
    /// not an integer, `page < 1`, `per_page` is outside
    /// `1..=limits.max_per_page`, or the resulting offset overflows.
    /// Bad values are rejected, never clamped.
    pub fn resolve(&self, limits: PageLimits) -> Result<PageRequest, AppError> {
        let mut errors = FieldErrors::new();

        let page = parse("page", self.page.as_deref(), 1, &mut errors);
        let per_page = parse(
            "per_page",
            self.per_page.as_deref(),
            limits.default_per_page,
            &mut errors,
        );

        if let Some(page) = page
            && page < 1
        {
            errors.insert("page".into(), vec!["Must be greater than or equal to 1.".into()]);
        }

        if let Some(per_page) = per_page
            && !(1..=limits.max_per_page).contains(&per_page)
        {
            errors.insert(
                "per_page".into(),
                vec![format!("Must be between 1 and {}.", limits.max_per_page)],
            );
        }

        // The row offset must fit in i64.
        if let (Some(page), Some(per_page)) = (page, per_page)
            && errors.is_empty()
            && (page - 1).checked_mul(per_page).is_none()
        {
            errors.insert("page".into(), vec!["Page is out of range.".into()]);
        }

        match (page, per_page) {
            (Some(page), Some(per_page)) if errors.is_empty() => Ok(PageRequest { page, per_page }),
            _ => Err(AppError::validation(errors)),
        }
    }
}

fn parse(name: &str, raw: Option<&str>, default: i64, errors: &mut FieldErrors) -> Option<i64> {
    match raw {
        None => Some(default),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.insert(name.to_string(), vec!["Not a valid integer.".into()]);
                None
            }
        },
    }
}

/// One page of a collection.
#[derive(Debug, Serialize)]
pub struct Page {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub results: Vec<Value>,
}

impl Page {
    /// Builds the envelope; `path` is the collection path used for links.
    pub fn new(request: PageRequest, total: i64, results: Vec<Value>, path: &str) -> Self {
        let pages = page_count(total, request.per_page);
        let link = |page: i64| format!("{path}?page={page}&per_page={}", request.per_page);

        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            pages,
            next: (request.page < pages).then(|| link(request.page + 1)),
            prev: (request.page > 1).then(|| link(request.page - 1)),
            results,
        }
    }
}

/// `ceil(total / per_page)`; zero for an empty collection.
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + per_page - 1) / per_page
    }
}
