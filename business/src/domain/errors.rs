/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.conflict")]
    Conflict,
    /// Any other store failure: connectivity, syntax, timeout.
    /// The payload is the store's own description, kept for logs only.
    #[error("repository.persistence")]
    Persistence(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn conflict() -> Self {
        RepositoryError::Conflict
    }
    pub fn persistence(detail: impl Into<String>) -> Self {
        RepositoryError::Persistence(detail.into())
    }
}
