//! Classification of SQLite unique-constraint violations.
//!
//! SQLite reports the violated constraint in the error message
//! (`UNIQUE constraint failed: links.short_code`) rather than through a
//! named-constraint API, so classification matches on the column path.

fn unique_violation_message(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.message().to_string())
}

/// Returns true if the error is a unique violation on `links.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    unique_violation_message(e).is_some_and(|m| m.contains("links.short_code"))
}

/// Returns true if the error is a unique violation on `links.original_url`.
pub fn is_unique_violation_on_url(e: &sqlx::Error) -> bool {
    unique_violation_message(e).is_some_and(|m| m.contains("links.original_url"))
}
