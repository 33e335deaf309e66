use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::delete::{DeleteOrderParams, DeleteOrderUseCase};

pub struct DeleteOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteOrderUseCase for DeleteOrderUseCaseImpl {
    async fn execute(&self, params: DeleteOrderParams) -> Result<(), OrderError> {
        if !params.confirmed {
            return Err(OrderError::ConfirmationRequired);
        }

        self.logger.info(&format!("Deleting order: {}", params.id));
        self.repository
            .delete(params.id)
            .await
            .map_err(OrderError::from_lookup)
    }
}
