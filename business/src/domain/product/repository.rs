use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::BatchId;

use super::model::Product;
use super::value_objects::Price;

/// Rows per request for bulk writes.
pub const WRITE_CHUNK_SIZE: usize = 50;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Whole catalog, ordered by name ascending.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Count-only probe; fails with `TableMissing` on an uninitialized store.
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError>;
    async fn update_price(
        &self,
        id: Uuid,
        price: Price,
        last_updated: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
    /// Flags every id in a single write.
    async fn request_review(&self, ids: &[Uuid], batch_id: &BatchId)
    -> Result<(), RepositoryError>;
    async fn complete_review(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepositoryError>;
}
