use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::export::builder::{current_list, full_backup};
use crate::domain::export::errors::ExportError;
use crate::domain::export::model::Workbook;
use crate::domain::export::use_cases::build::{ExportCatalogParams, ExportCatalogUseCase, ExportKind};
use crate::domain::logger::Logger;
use crate::domain::price_history::model::today;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::product::repository::ProductRepository;

pub struct ExportCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub history_repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportCatalogUseCase for ExportCatalogUseCaseImpl {
    async fn execute(&self, params: ExportCatalogParams) -> Result<Workbook, ExportError> {
        let products = self.repository.get_all().await?;

        let workbook = match params.kind {
            ExportKind::CurrentList => current_list(&products, today()),
            ExportKind::FullBackup => {
                let history = match self.history_repository.get_all().await {
                    Ok(history) => Some(history),
                    Err(e) => {
                        self.logger.warn(&format!(
                            "History fetch failed, exporting main sheet only: {}",
                            e
                        ));
                        None
                    }
                };
                full_backup(&products, history.as_deref(), today())
            }
        };

        self.logger.info(&format!(
            "Exported {} with {} sheets",
            workbook.file_name,
            workbook.sheets.len()
        ));
        Ok(workbook)
    }
}
