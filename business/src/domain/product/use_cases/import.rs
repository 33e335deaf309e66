use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ImportProductsParams {
    /// Pasted text, one product per line.
    pub text: String,
}

#[async_trait]
pub trait ImportProductsUseCase: Send + Sync {
    async fn execute(&self, params: ImportProductsParams) -> Result<Vec<Product>, ProductError>;
}
