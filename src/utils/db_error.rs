//! Mapping of database constraint violations to field errors.

use crate::error::{AppError, map_sqlx_error};

/// Returns the constraint name if `e` is a unique violation.
pub fn unique_violation(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Converts a write error, turning unique violations on known constraints into
/// a validation error on the matching field.
///
/// `constraints` maps constraint names to `(field, message)`. Anything else goes
/// through [`map_sqlx_error`].
pub fn map_write_error(e: sqlx::Error, constraints: &[(&str, &str, &str)]) -> AppError {
    if let Some(constraint) = unique_violation(&e)
        && let Some((_, field, message)) = constraints.iter().find(|(c, _, _)| *c == constraint)
    {
        return AppError::field(*field, *message);
    }

    map_sqlx_error(e)
}
