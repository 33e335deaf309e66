use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::use_cases::complete::{CompleteReviewParams, CompleteReviewUseCase};

/// Clears the review flag and batch of one product. Completing a product
/// that is not pending is a no-op write.
pub struct CompleteReviewUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompleteReviewUseCase for CompleteReviewUseCaseImpl {
    async fn execute(&self, params: CompleteReviewParams) -> Result<(), ReviewError> {
        self.logger
            .info(&format!("Completing review: {}", params.product_id));

        self.repository
            .complete_review(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })
    }
}
