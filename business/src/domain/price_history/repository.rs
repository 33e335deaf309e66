use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::PriceHistoryEntry;

#[async_trait]
pub trait PriceHistoryRepository: Send + Sync {
    /// Upserts on `(product_id, recorded_date)`: a second price for the same
    /// product on the same day overwrites the first.
    async fn record(&self, entry: &PriceHistoryEntry) -> Result<(), RepositoryError>;
    /// Same upsert semantics for a batch, written in one request.
    async fn record_many(&self, entries: &[PriceHistoryEntry]) -> Result<(), RepositoryError>;
    /// Every entry, in no particular order.
    async fn get_all(&self) -> Result<Vec<PriceHistoryEntry>, RepositoryError>;
}
