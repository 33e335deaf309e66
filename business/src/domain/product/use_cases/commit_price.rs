use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::PriceInput;

pub struct CommitPriceParams {
    pub product_id: Uuid,
    pub price: PriceInput,
}

/// Saves a product price. A product pending review leaves review as a
/// consequence of the save.
#[async_trait]
pub trait CommitPriceUseCase: Send + Sync {
    async fn execute(&self, params: CommitPriceParams) -> Result<Product, ProductError>;
}
