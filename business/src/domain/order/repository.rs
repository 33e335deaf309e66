use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Order, OrderPatch};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Applies only the fields present in `patch` and returns the stored row.
    async fn update(&self, id: Uuid, patch: &OrderPatch) -> Result<Order, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
