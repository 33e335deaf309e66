use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::application::catalog::sync::CatalogStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum CatalogStateDto {
    #[oai(rename = "loading")]
    Loading,
    #[oai(rename = "ready")]
    Ready,
    #[oai(rename = "failed")]
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CatalogStatusResponse {
    pub state: CatalogStateDto,
    /// Failure code of the last load, e.g. `catalog.table_missing`
    pub error: Option<String>,
    /// `true` when the schema must be applied (see `/setup/schema`)
    pub setup_required: bool,
    pub product_count: u64,
    pub pending_review_count: u64,
}

impl CatalogStatusResponse {
    pub fn new(status: CatalogStatus, product_count: usize, pending_review_count: usize) -> Self {
        let (state, error) = match &status {
            CatalogStatus::Loading => (CatalogStateDto::Loading, None),
            CatalogStatus::Ready => (CatalogStateDto::Ready, None),
            CatalogStatus::Failed(e) => (CatalogStateDto::Failed, Some(e.to_string())),
        };

        Self {
            state,
            setup_required: matches!(
                status,
                CatalogStatus::Failed(business::domain::catalog::errors::CatalogError::TableMissing)
            ),
            error,
            product_count: product_count as u64,
            pending_review_count: pending_review_count as u64,
        }
    }
}
