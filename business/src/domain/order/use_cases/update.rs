use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderPatch};

pub struct UpdateOrderParams {
    pub id: Uuid,
    pub patch: OrderPatch,
}

#[async_trait]
pub trait UpdateOrderUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderParams) -> Result<Order, OrderError>;
}
