#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.selection_empty")]
    SelectionEmpty,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
