use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::model::{PriceHistoryEntry, today};
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::import::parse_lines;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::{ProductRepository, WRITE_CHUNK_SIZE};
use crate::domain::product::use_cases::import::{ImportProductsParams, ImportProductsUseCase};
use crate::domain::product::value_objects::sanitize;

pub struct ImportProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub history_repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ImportProductsUseCase for ImportProductsUseCaseImpl {
    async fn execute(&self, params: ImportProductsParams) -> Result<Vec<Product>, ProductError> {
        let records = parse_lines(&params.text);
        if records.is_empty() {
            return Err(ProductError::NothingToImport);
        }

        let products = records
            .into_iter()
            .map(|record| {
                Product::new(NewProductProps {
                    name: record.name,
                    price: sanitize(&record.price),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.logger
            .info(&format!("Importing {} products", products.len()));

        for (index, chunk) in products.chunks(WRITE_CHUNK_SIZE).enumerate() {
            if let Err(e) = self.repository.insert_many(chunk).await {
                self.logger.error(&format!(
                    "Import aborted at chunk {}: {}",
                    index + 1,
                    e
                ));
                return Err(e.into());
            }
        }

        let recorded_date = today();
        let entries: Vec<PriceHistoryEntry> = products
            .iter()
            .filter_map(|product| PriceHistoryEntry::for_product(product, recorded_date))
            .collect();
        for chunk in entries.chunks(WRITE_CHUNK_SIZE) {
            if let Err(e) = self.history_repository.record_many(chunk).await {
                self.logger
                    .warn(&format!("Failed to record imported price history: {}", e));
            }
        }

        self.logger
            .info(&format!("Imported {} products", products.len()));
        Ok(products)
    }
}
