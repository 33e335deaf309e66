use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductsParams {
    pub ids: Vec<Uuid>,
    /// Destructive: callers must have asked the user first.
    pub confirmed: bool,
}

#[async_trait]
pub trait DeleteProductsUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductsParams) -> Result<usize, ProductError>;
}
