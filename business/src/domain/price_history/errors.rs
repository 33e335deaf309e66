#[derive(Debug, thiserror::Error)]
pub enum PriceHistoryError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
