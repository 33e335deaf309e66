use crate::domain::errors::RepositoryError;

/// Failure of the session-level catalog load, classified so the caller can
/// pick between guided repair and a generic error state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The `products` table does not exist yet.
    #[error("catalog.table_missing")]
    TableMissing,
    /// Timed out or could not reach the store.
    #[error("catalog.unreachable")]
    Unreachable,
    #[error("catalog.load_failed")]
    LoadFailed,
    #[error("catalog.subscription_failed")]
    SubscriptionFailed,
    #[error("catalog.not_loaded")]
    NotLoaded,
    #[error("catalog.seed_failed")]
    SeedFailed,
}

impl From<RepositoryError> for CatalogError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::TableMissing => CatalogError::TableMissing,
            RepositoryError::Unavailable => CatalogError::Unreachable,
            _ => CatalogError::LoadFailed,
        }
    }
}
