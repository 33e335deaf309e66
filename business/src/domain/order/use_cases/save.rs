use async_trait::async_trait;

use crate::domain::order::draft::OrderDraft;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct SaveOrderParams {
    pub draft: OrderDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SavedOrder {
    Created(Order),
    Updated(Order),
}

impl SavedOrder {
    pub fn order(&self) -> &Order {
        match self {
            SavedOrder::Created(order) | SavedOrder::Updated(order) => order,
        }
    }
}

/// Inserts a fresh draft or overwrites the order the draft was loaded from.
#[async_trait]
pub trait SaveOrderUseCase: Send + Sync {
    async fn execute(&self, params: SaveOrderParams) -> Result<SavedOrder, OrderError>;
}
