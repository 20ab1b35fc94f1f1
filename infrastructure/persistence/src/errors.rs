use std::borrow::Cow;

use business::domain::errors::RepositoryError;

/// Maps a raw sqlx failure onto the repository vocabulary.
///
/// Unique violations are recognised by their SQLSTATE class first. Only when
/// the driver reports no code at all does the message text get inspected.
pub fn classify(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation()
                || (db_err.code().is_none()
                    && message_indicates_unique_violation(db_err.message()))
            {
                return RepositoryError::Conflict;
            }
            let code = db_err.code().unwrap_or(Cow::Borrowed("none"));
            tracing::error!(
                code = %code,
                error = %db_err,
                "database rejected statement"
            );
            RepositoryError::Persistence(db_err.to_string())
        }
        other => {
            tracing::error!(error = %other, "database operation failed");
            RepositoryError::Persistence(other.to_string())
        }
    }
}

/// Last-resort text heuristic for drivers that do not expose SQLSTATE codes.
pub fn message_indicates_unique_violation(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("unique") || message.contains("duplicate key")
}
