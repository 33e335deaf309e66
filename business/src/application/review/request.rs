use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::use_cases::request::{
    RequestReviewParams, RequestReviewUseCase, ReviewRequest,
};
use crate::domain::shared::value_objects::BatchId;

pub struct RequestReviewUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestReviewUseCase for RequestReviewUseCaseImpl {
    async fn execute(&self, params: RequestReviewParams) -> Result<ReviewRequest, ReviewError> {
        if params.product_ids.is_empty() {
            return Err(ReviewError::SelectionEmpty);
        }

        let batch_id = params.batch_id.unwrap_or_else(BatchId::generate);
        self.logger.info(&format!(
            "Requesting review of {} products in {}",
            params.product_ids.len(),
            batch_id
        ));

        self.repository
            .request_review(&params.product_ids, &batch_id)
            .await?;

        Ok(ReviewRequest {
            batch_id,
            count: params.product_ids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_utils::{MockProductRepo, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_flag_all_products_under_one_batch() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_request_review()
            .withf(|ids, batch| ids.len() == 3 && batch.as_str().starts_with("BATCH-"))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RequestReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let request = use_case
            .execute(RequestReviewParams {
                product_ids: ids,
                batch_id: None,
            })
            .await
            .unwrap();

        assert_eq!(request.count, 3);
        assert!(request.batch_id.as_str().starts_with("BATCH-"));
    }

    #[tokio::test]
    async fn should_keep_supplied_batch_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_request_review()
            .withf(|_, batch| batch.as_str() == "BATCH-42")
            .returning(|_, _| Ok(()));

        let use_case = RequestReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let request = use_case
            .execute(RequestReviewParams {
                product_ids: vec![Uuid::new_v4()],
                batch_id: Some(BatchId::new("BATCH-42")),
            })
            .await
            .unwrap();

        assert_eq!(request.batch_id, BatchId::new("BATCH-42"));
    }

    #[tokio::test]
    async fn should_reject_empty_selection() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_request_review().never();

        let use_case = RequestReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RequestReviewParams {
                product_ids: vec![],
                batch_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::SelectionEmpty));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_request_review()
            .returning(|_, _| Err(RepositoryError::Unavailable));

        let use_case = RequestReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RequestReviewParams {
                product_ids: vec![Uuid::new_v4()],
                batch_id: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReviewError::Repository(RepositoryError::Unavailable)
        ));
    }
}
