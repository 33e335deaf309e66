use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;

pub struct DeleteOrderParams {
    pub id: Uuid,
    pub confirmed: bool,
}

#[async_trait]
pub trait DeleteOrderUseCase: Send + Sync {
    async fn execute(&self, params: DeleteOrderParams) -> Result<(), OrderError>;
}
