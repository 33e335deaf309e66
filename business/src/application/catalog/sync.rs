//! Session-scoped view of the shared catalog.
//!
//! [`CatalogSync`] owns the local snapshot. It loads the whole catalog with a
//! hard timeout, then listens to the store's change feed: every change
//! triggers a full reload, and an update that moves a product into review
//! also fires one notification in the background.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domain::catalog::change::{CatalogChangeSource, ProductChange};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::{
    NotificationService, REVIEW_REQUESTED_TITLE, review_requested_body,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed(CatalogError),
}

struct Snapshot {
    status: CatalogStatus,
    products: Vec<Product>,
}

pub struct CatalogSync {
    repository: Arc<dyn ProductRepository>,
    changes: Arc<dyn CatalogChangeSource>,
    notifier: Arc<dyn NotificationService>,
    logger: Arc<dyn Logger>,
    fetch_timeout: Duration,
    snapshot: RwLock<Snapshot>,
}

/// Running change listener. Stopping or dropping it unsubscribes.
pub struct SyncHandle {
    task: Option<JoinHandle<()>>,
}

impl SyncHandle {
    pub fn stop(mut self) {
        self.abort();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

impl CatalogSync {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        changes: Arc<dyn CatalogChangeSource>,
        notifier: Arc<dyn NotificationService>,
        logger: Arc<dyn Logger>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            changes,
            notifier,
            logger,
            fetch_timeout,
            snapshot: RwLock::new(Snapshot {
                status: CatalogStatus::Loading,
                products: Vec::new(),
            }),
        }
    }

    /// Fetches the whole catalog and replaces the snapshot. On failure the
    /// previous products are kept and the status records the cause.
    pub async fn load(&self) -> Result<usize, CatalogError> {
        let fetched = tokio::time::timeout(self.fetch_timeout, self.repository.get_all()).await;

        let result = match fetched {
            Ok(Ok(products)) => Ok(products),
            Ok(Err(e)) => Err(CatalogError::from(e)),
            Err(_) => Err(CatalogError::Unreachable),
        };

        let mut snapshot = self.snapshot.write().await;
        match result {
            Ok(products) => {
                let count = products.len();
                snapshot.products = products;
                snapshot.status = CatalogStatus::Ready;
                self.logger
                    .debug(&format!("Catalog loaded: {} products", count));
                Ok(count)
            }
            Err(e) => {
                self.logger.error(&format!("Catalog load failed: {}", e));
                snapshot.status = CatalogStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Subscribes to the change feed and spawns the reconcile loop.
    pub async fn start(self: &Arc<Self>) -> Result<SyncHandle, CatalogError> {
        let mut subscription = self.changes.subscribe().await.map_err(|e| {
            self.logger
                .error(&format!("Catalog subscription failed: {}", e));
            CatalogError::SubscriptionFailed
        })?;

        let sync = Arc::clone(self);
        let task = tokio::spawn(async move {
            while let Some(change) = subscription.next().await {
                sync.apply(change).await;
            }
            sync.logger.warn("Catalog change feed closed");
        });

        self.logger.info("Catalog sync started");
        Ok(SyncHandle { task: Some(task) })
    }

    async fn apply(&self, change: ProductChange) {
        if let Some(product) = change.review_requested() {
            let notifier = Arc::clone(&self.notifier);
            let body = review_requested_body(&product.name);
            tokio::spawn(async move {
                notifier.notify(REVIEW_REQUESTED_TITLE, &body).await;
            });
        }
        // Failures are recorded in the snapshot status.
        let _ = self.load().await;
    }

    pub async fn status(&self) -> CatalogStatus {
        self.snapshot.read().await.status.clone()
    }

    /// Current catalog, name ascending. Fails while the catalog has never
    /// loaded or the last load failed.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        match &snapshot.status {
            CatalogStatus::Ready => Ok(snapshot.products.clone()),
            CatalogStatus::Loading => Err(CatalogError::NotLoaded),
            CatalogStatus::Failed(e) => Err(e.clone()),
        }
    }

    pub async fn find(&self, id: Uuid) -> Option<Product> {
        self.snapshot
            .read()
            .await
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// Rows held by the snapshot, including ones kept after a failed reload.
    pub async fn product_count(&self) -> usize {
        self.snapshot.read().await.products.len()
    }

    pub async fn pending_review_count(&self) -> usize {
        self.snapshot
            .read()
            .await
            .products
            .iter()
            .filter(|product| product.is_review_requested())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::commit_price::CommitPriceUseCaseImpl;
    use crate::application::product::create::CreateProductUseCaseImpl;
    use crate::application::review::request::RequestReviewUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::price_history::model::today;
    use crate::domain::product::use_cases::commit_price::{CommitPriceParams, CommitPriceUseCase};
    use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
    use crate::domain::product::value_objects::{Price, PriceInput, ReviewState};
    use crate::domain::review::use_cases::request::{RequestReviewParams, RequestReviewUseCase};
    use crate::test_utils::{
        InMemoryStore, MockProductRepo, RecordingNotifier, make_product, mock_logger,
    };

    async fn eventually(mut condition: impl FnMut() -> bool) {
        for _ in 0..200 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not reached");
    }

    fn snapshot_has(sync: &CatalogSync, predicate: impl Fn(&[Product]) -> bool) -> bool {
        sync.snapshot
            .try_read()
            .is_ok_and(|snapshot| predicate(&snapshot.products))
    }

    fn sync_over(store: &Arc<InMemoryStore>, notifier: &Arc<RecordingNotifier>) -> Arc<CatalogSync> {
        Arc::new(CatalogSync::new(
            store.clone(),
            store.clone(),
            notifier.clone(),
            mock_logger(),
            Duration::from_secs(1),
        ))
    }

    #[tokio::test]
    async fn should_not_serve_products_before_first_load() {
        let store = Arc::new(InMemoryStore::default());
        let sync = sync_over(&store, &Arc::new(RecordingNotifier::default()));

        assert_eq!(sync.status().await, CatalogStatus::Loading);
        assert_eq!(sync.products().await.unwrap_err(), CatalogError::NotLoaded);
    }

    #[tokio::test]
    async fn should_classify_missing_table_on_load() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::TableMissing));
        let store = Arc::new(InMemoryStore::default());
        let sync = CatalogSync::new(
            Arc::new(mock_repo),
            store,
            Arc::new(RecordingNotifier::default()),
            mock_logger(),
            Duration::from_secs(1),
        );

        assert_eq!(sync.load().await.unwrap_err(), CatalogError::TableMissing);
        assert_eq!(
            sync.status().await,
            CatalogStatus::Failed(CatalogError::TableMissing)
        );
    }

    #[tokio::test]
    async fn should_treat_slow_fetch_as_unreachable() {
        struct StalledRepo;

        #[async_trait::async_trait]
        impl ProductRepository for StalledRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
                std::future::pending().await
            }
            async fn get_by_id(&self, _id: Uuid) -> Result<Product, RepositoryError> {
                unimplemented!()
            }
            async fn count(&self) -> Result<u64, RepositoryError> {
                unimplemented!()
            }
            async fn insert_many(&self, _products: &[Product]) -> Result<(), RepositoryError> {
                unimplemented!()
            }
            async fn update_price(
                &self,
                _id: Uuid,
                _price: Price,
                _last_updated: chrono::DateTime<chrono::Utc>,
            ) -> Result<(), RepositoryError> {
                unimplemented!()
            }
            async fn request_review(
                &self,
                _ids: &[Uuid],
                _batch_id: &crate::domain::shared::value_objects::BatchId,
            ) -> Result<(), RepositoryError> {
                unimplemented!()
            }
            async fn complete_review(&self, _id: Uuid) -> Result<(), RepositoryError> {
                unimplemented!()
            }
            async fn delete_many(&self, _ids: &[Uuid]) -> Result<(), RepositoryError> {
                unimplemented!()
            }
        }

        let sync = CatalogSync::new(
            Arc::new(StalledRepo),
            Arc::new(InMemoryStore::default()),
            Arc::new(RecordingNotifier::default()),
            mock_logger(),
            Duration::from_millis(20),
        );

        assert_eq!(sync.load().await.unwrap_err(), CatalogError::Unreachable);
    }

    #[tokio::test]
    async fn should_keep_previous_products_when_reload_fails() {
        let tea = make_product("Tea", Price::Priced(10.0));
        let tea_id = tea.id;
        let mut mock_repo = MockProductRepo::new();
        let mut calls = 0;
        mock_repo.expect_get_all().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![tea.clone()])
            } else {
                Err(RepositoryError::Unavailable)
            }
        });
        let sync = CatalogSync::new(
            Arc::new(mock_repo),
            Arc::new(InMemoryStore::default()),
            Arc::new(RecordingNotifier::default()),
            mock_logger(),
            Duration::from_secs(1),
        );

        sync.load().await.unwrap();
        assert!(sync.load().await.is_err());

        assert_eq!(
            sync.status().await,
            CatalogStatus::Failed(CatalogError::Unreachable)
        );
        assert!(sync.find(tea_id).await.is_some());
    }

    #[tokio::test]
    async fn should_reload_on_any_change_and_notify_only_on_review_entry() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let sync = sync_over(&store, &notifier);
        sync.load().await.unwrap();
        let _handle = sync.start().await.unwrap();

        let tea = make_product("Tea", Price::Priced(10.0));
        store.insert_many(std::slice::from_ref(&tea)).await.unwrap();
        eventually(|| snapshot_has(&sync, |products| products.iter().any(|p| p.id == tea.id))).await;

        store
            .update_price(tea.id, Price::Priced(12.0), chrono::Utc::now())
            .await
            .unwrap();
        eventually(|| {
            snapshot_has(&sync, |products| {
                products.iter().any(|p| p.price == Price::Priced(12.0))
            })
        })
        .await;

        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn should_reload_without_waiting_for_slow_notifier() {
        struct StalledNotifier;

        #[async_trait::async_trait]
        impl NotificationService for StalledNotifier {
            async fn notify(&self, _title: &str, _body: &str) {
                std::future::pending::<()>().await
            }
        }

        let store = Arc::new(InMemoryStore::default());
        let tea = make_product("Tea", Price::Priced(10.0));
        store.insert_many(std::slice::from_ref(&tea)).await.unwrap();
        let sync = Arc::new(CatalogSync::new(
            store.clone(),
            store.clone(),
            Arc::new(StalledNotifier),
            mock_logger(),
            Duration::from_secs(1),
        ));
        sync.load().await.unwrap();
        let _handle = sync.start().await.unwrap();

        store
            .request_review(&[tea.id], &crate::domain::shared::value_objects::BatchId::new("BATCH-3"))
            .await
            .unwrap();
        eventually(|| snapshot_has(&sync, |products| products.iter().any(Product::is_review_requested))).await;

        store
            .update_price(tea.id, Price::Priced(12.0), chrono::Utc::now())
            .await
            .unwrap();
        eventually(|| {
            snapshot_has(&sync, |products| {
                products.iter().any(|p| p.price == Price::Priced(12.0))
            })
        })
        .await;
    }

    #[tokio::test]
    async fn should_stop_listening_after_stop() {
        let store = Arc::new(InMemoryStore::default());
        let sync = sync_over(&store, &Arc::new(RecordingNotifier::default()));
        sync.load().await.unwrap();
        let handle = sync.start().await.unwrap();
        assert!(handle.is_running());

        handle.stop();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let tea = make_product("Tea", Price::Priced(10.0));
        store.insert_many(std::slice::from_ref(&tea)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(sync.find(tea.id).await.is_none());
    }

    #[tokio::test]
    async fn should_run_review_cycle_end_to_end() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let sync = sync_over(&store, &notifier);
        sync.load().await.unwrap();
        let _handle = sync.start().await.unwrap();

        let create = CreateProductUseCaseImpl {
            repository: store.clone(),
            history_repository: store.clone(),
            logger: mock_logger(),
        };
        let request = RequestReviewUseCaseImpl {
            repository: store.clone(),
            logger: mock_logger(),
        };
        let commit = CommitPriceUseCaseImpl {
            repository: store.clone(),
            history_repository: store.clone(),
            logger: mock_logger(),
        };

        let tea = create
            .execute(CreateProductParams {
                name: "Tea".to_string(),
                price: PriceInput::from("5,000"),
            })
            .await
            .unwrap();
        assert_eq!(tea.price, Price::Priced(5000.0));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].recorded_date, today());

        request
            .execute(RequestReviewParams {
                product_ids: vec![tea.id],
                batch_id: None,
            })
            .await
            .unwrap();
        eventually(|| snapshot_has(&sync, |products| products.iter().any(Product::is_review_requested))).await;
        eventually(|| notifier.sent().len() == 1).await;
        assert_eq!(sync.pending_review_count().await, 1);
        assert_eq!(notifier.sent()[0].0, REVIEW_REQUESTED_TITLE);
        assert_eq!(notifier.sent()[0].1, review_requested_body("Tea"));

        let updated = commit
            .execute(CommitPriceParams {
                product_id: tea.id,
                price: PriceInput::Number(5500.0),
            })
            .await
            .unwrap();
        assert_eq!(updated.review, ReviewState::Normal);

        eventually(|| {
            snapshot_has(&sync, |products| {
                products.iter().any(|p| {
                    p.review == ReviewState::Normal && p.price == Price::Priced(5500.0)
                })
            })
        })
        .await;
        let history = store.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, 5500.0);
        assert_eq!(notifier.sent().len(), 1);
    }
}
