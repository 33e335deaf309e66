use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::model::{PriceHistoryEntry, today};
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::sanitize;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub history_repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name.trim()));

        let product = Product::new(NewProductProps {
            name: params.name,
            price: sanitize(&params.price),
        })?;

        self.repository
            .insert_many(std::slice::from_ref(&product))
            .await?;

        if let Some(entry) = PriceHistoryEntry::for_product(&product, today())
            && let Err(e) = self.history_repository.record(&entry).await
        {
            self.logger.warn(&format!(
                "Failed to record price history for product {}: {}",
                product.id, e
            ));
        }

        self.logger
            .info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
