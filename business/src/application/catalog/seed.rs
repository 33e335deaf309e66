use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::seed::{SeedCatalogParams, SeedCatalogUseCase, SeedOutcome};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::import::{ImportProductsParams, ImportProductsUseCase};

pub struct SeedCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub importer: Arc<dyn ImportProductsUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedCatalogUseCase for SeedCatalogUseCaseImpl {
    async fn execute(&self, params: SeedCatalogParams) -> Result<SeedOutcome, CatalogError> {
        let existing = self.repository.count().await.map_err(|e| {
            self.logger
                .error(&format!("Catalog probe failed: {}", e));
            CatalogError::from(e)
        })?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let Some(text) = params.seed_text else {
            self.logger.info("Catalog is empty and no seed source is configured");
            return Ok(SeedOutcome::NoSource);
        };

        self.logger.info("Catalog is empty, seeding initial data");
        match self.importer.execute(ImportProductsParams { text }).await {
            Ok(products) => {
                self.logger
                    .info(&format!("Seeding complete: {} products", products.len()));
                Ok(SeedOutcome::Seeded(products.len()))
            }
            Err(ProductError::NothingToImport) => Ok(SeedOutcome::NoSource),
            Err(ProductError::Repository(e)) => {
                self.logger.error(&format!("Seeding failed: {}", e));
                Err(CatalogError::from(e))
            }
            Err(e) => {
                self.logger.error(&format!("Seeding failed: {}", e));
                Err(CatalogError::SeedFailed)
            }
        }
    }
}
