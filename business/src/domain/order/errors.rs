#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.not_found")]
    NotFound,
    #[error("order.item_not_found")]
    ItemNotFound,
    #[error("order.product_unpriced")]
    ProductUnpriced,
    #[error("order.margin_invalid")]
    MarginInvalid,
    #[error("order.amount_out_of_range")]
    AmountOutOfRange,
    #[error("order.name_empty")]
    NameEmpty,
    #[error("order.confirmation_required")]
    ConfirmationRequired,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl OrderError {
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => OrderError::NotFound,
            other => OrderError::Repository(other),
        }
    }
}
