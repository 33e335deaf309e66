use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::pricing::validate_margin;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update::{UpdateOrderParams, UpdateOrderUseCase};

pub struct UpdateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderUseCase for UpdateOrderUseCaseImpl {
    async fn execute(&self, params: UpdateOrderParams) -> Result<Order, OrderError> {
        let mut patch = params.patch;

        if let Some(name) = patch.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(OrderError::NameEmpty);
            }
        }
        if patch.items.as_ref().is_some_and(Vec::is_empty) {
            return Err(OrderError::CartEmpty);
        }
        if let Some(margin) = patch.global_profit_percent {
            validate_margin(margin)?;
        }

        // Nothing to write: hand back the stored row unchanged.
        if patch.is_empty() {
            return self
                .repository
                .get_by_id(params.id)
                .await
                .map_err(OrderError::from_lookup);
        }

        self.logger.info(&format!("Updating order: {}", params.id));
        self.repository
            .update(params.id, &patch)
            .await
            .map_err(OrderError::from_lookup)
    }
}
