use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::order::draft::DraftSubmission;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::save::{SaveOrderParams, SaveOrderUseCase, SavedOrder};

pub struct SaveOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveOrderUseCase for SaveOrderUseCaseImpl {
    async fn execute(&self, params: SaveOrderParams) -> Result<SavedOrder, OrderError> {
        match params.draft.submission(Utc::now())? {
            DraftSubmission::Insert(props) => {
                let order = Order::new(props)?;
                self.repository.insert(&order).await?;
                self.logger.info(&format!("Order saved: {}", order.id));
                Ok(SavedOrder::Created(order))
            }
            DraftSubmission::Update(id, patch) => {
                let order = self
                    .repository
                    .update(id, &patch)
                    .await
                    .map_err(OrderError::from_lookup)?;
                self.logger.info(&format!("Order updated: {}", order.id));
                Ok(SavedOrder::Updated(order))
            }
        }
    }
}
