use async_trait::async_trait;

use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::PriceHistoryEntry;

#[async_trait]
pub trait GetPriceHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PriceHistoryEntry>, PriceHistoryError>;
}
