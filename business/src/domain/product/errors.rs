#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.import_empty")]
    NothingToImport,
    #[error("product.selection_empty")]
    SelectionEmpty,
    #[error("product.confirmation_required")]
    ConfirmationRequired,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Maps a lookup failure, keeping `NotFound` as a product error.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
