//! Startup check that entity columns exist in the database.

use sqlx::PgPool;

use crate::domain::entities::Entity;

/// Verifies that every column listed in `E::COLUMNS` exists in `E::TABLE`.
///
/// # Errors
///
/// Returns an error naming the missing columns, or the database error.
pub async fn verify_table<E: Entity>(pool: &PgPool) -> anyhow::Result<()> {
    let existing: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT column_name::TEXT
        FROM information_schema.columns
        WHERE table_schema = current_schema() AND table_name = $1
        "#,
    )
    .bind(E::TABLE)
    .fetch_all(pool)
    .await?;

    let missing = missing_columns(E::COLUMNS, &existing);
    if !missing.is_empty() {
        anyhow::bail!(
            "Table '{}' is missing columns: {}",
            E::TABLE,
            missing.join(", ")
        );
    }

    tracing::debug!(table = E::TABLE, "Table columns verified");
    Ok(())
}

fn missing_columns<'a>(expected: &[&'a str], existing: &[String]) -> Vec<&'a str> {
    expected
        .iter()
        .copied()
        .filter(|column| !existing.iter().any(|e| e.as_str() == *column))
        .collect()
}
