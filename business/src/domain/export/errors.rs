#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
