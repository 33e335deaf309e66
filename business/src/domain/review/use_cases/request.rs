use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::shared::value_objects::BatchId;

pub struct RequestReviewParams {
    pub product_ids: Vec<Uuid>,
    /// Generated when absent.
    pub batch_id: Option<BatchId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub batch_id: BatchId,
    pub count: usize,
}

#[async_trait]
pub trait RequestReviewUseCase: Send + Sync {
    async fn execute(&self, params: RequestReviewParams) -> Result<ReviewRequest, ReviewError>;
}
