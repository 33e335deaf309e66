use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::PriceHistoryEntry;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::price_history::use_cases::get_all::GetPriceHistoryUseCase;

pub struct GetPriceHistoryUseCaseImpl {
    pub repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPriceHistoryUseCase for GetPriceHistoryUseCaseImpl {
    /// Newest day first, then by product.
    async fn execute(&self) -> Result<Vec<PriceHistoryEntry>, PriceHistoryError> {
        self.logger.debug("Fetching price history");

        let mut entries = self.repository.get_all().await?;
        entries.sort_by(|a, b| {
            b.recorded_date
                .cmp(&a.recorded_date)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_utils::{InMemoryStore, MockHistoryRepo, mock_logger};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_entries_newest_first() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                PriceHistoryEntry::new(product_id, 10.0, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                PriceHistoryEntry::new(product_id, 12.0, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            ])
        });

        let use_case = GetPriceHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let entries = use_case.execute().await.unwrap();

        assert_eq!(entries[0].price, 12.0);
        assert_eq!(entries[1].price, 10.0);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::TableMissing));

        let use_case = GetPriceHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            PriceHistoryError::Repository(RepositoryError::TableMissing)
        ));
    }

    #[tokio::test]
    async fn should_keep_one_entry_per_product_and_day() {
        let store = Arc::new(InMemoryStore::default());
        let product_id = Uuid::new_v4();
        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();

        store
            .record(&PriceHistoryEntry::new(product_id, 10.0, monday))
            .await
            .unwrap();
        store
            .record(&PriceHistoryEntry::new(product_id, 11.0, monday))
            .await
            .unwrap();
        store
            .record(&PriceHistoryEntry::new(product_id, 12.0, tuesday))
            .await
            .unwrap();

        let use_case = GetPriceHistoryUseCaseImpl {
            repository: store,
            logger: mock_logger(),
        };

        let entries = use_case.execute().await.unwrap();

        assert_eq!(
            entries,
            vec![
                PriceHistoryEntry::new(product_id, 12.0, tuesday),
                PriceHistoryEntry::new(product_id, 11.0, monday),
            ]
        );
    }
}
