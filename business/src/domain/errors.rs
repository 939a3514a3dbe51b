/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.unavailable: {0}")]
    Unavailable(String),
    #[error("repository.corrupted: {0}")]
    Corrupted(String),
    #[error("repository.persistence: {0}")]
    Persistence(String),
}

impl RepositoryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        RepositoryError::Unavailable(reason.into())
    }
    pub fn corrupted(reason: impl Into<String>) -> Self {
        RepositoryError::Corrupted(reason.into())
    }
    pub fn persistence(reason: impl Into<String>) -> Self {
        RepositoryError::Persistence(reason.into())
    }
}
