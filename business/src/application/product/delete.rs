use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductsParams, DeleteProductsUseCase};

pub struct DeleteProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductsUseCase for DeleteProductsUseCaseImpl {
    async fn execute(&self, params: DeleteProductsParams) -> Result<usize, ProductError> {
        if params.ids.is_empty() {
            return Err(ProductError::SelectionEmpty);
        }
        if !params.confirmed {
            return Err(ProductError::ConfirmationRequired);
        }

        self.logger
            .info(&format!("Deleting {} products", params.ids.len()));

        self.repository.delete_many(&params.ids).await?;

        Ok(params.ids.len())
    }
}
