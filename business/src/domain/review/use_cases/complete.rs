use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;

pub struct CompleteReviewParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait CompleteReviewUseCase: Send + Sync {
    async fn execute(&self, params: CompleteReviewParams) -> Result<(), ReviewError>;
}
