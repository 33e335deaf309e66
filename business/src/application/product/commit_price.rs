use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::price_history::model::{PriceHistoryEntry, today};
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, validate_price};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::commit_price::{CommitPriceParams, CommitPriceUseCase};
use crate::domain::product::value_objects::sanitize;

pub struct CommitPriceUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub history_repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CommitPriceUseCase for CommitPriceUseCaseImpl {
    async fn execute(&self, params: CommitPriceParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Committing price for product: {}", params.product_id));

        let price = validate_price(sanitize(&params.price))?;
        let mut product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(ProductError::from_lookup)?;

        let now = Utc::now();
        self.repository
            .update_price(product.id, price, now)
            .await
            .map_err(ProductError::from_lookup)?;
        product.set_price(price, now);

        if let Some(entry) = PriceHistoryEntry::for_product(&product, today())
            && let Err(e) = self.history_repository.record(&entry).await
        {
            self.logger.warn(&format!(
                "Failed to record price history for product {}: {}",
                product.id, e
            ));
        }

        // A saved price resolves an open review.
        if product.is_review_requested() {
            self.repository
                .complete_review(product.id)
                .await
                .map_err(ProductError::from_lookup)?;
            product.complete_review();
            self.logger
                .info(&format!("Review completed by price save: {}", product.id));
        }

        Ok(product)
    }
}
