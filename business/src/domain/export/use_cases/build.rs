use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::export::errors::ExportError;
use crate::domain::export::model::Workbook;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Name and current price only.
    CurrentList,
    /// Every product plus one sheet per recorded history date.
    FullBackup,
}

pub struct ExportCatalogParams {
    pub kind: ExportKind,
}

#[async_trait]
pub trait ExportCatalogUseCase: Send + Sync {
    async fn execute(&self, params: ExportCatalogParams) -> Result<Workbook, ExportError>;
}
