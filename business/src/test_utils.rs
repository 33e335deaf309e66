//! Shared test doubles: `mockall` mocks for every port plus an in-memory
//! store that behaves like the real catalog tables, change feed included.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::catalog::change::{
    CatalogChangeSource, ChangeKind, ChangeSubscription, ProductChange,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, OrderPatch};
use crate::domain::order::repository::OrderRepository;
use crate::domain::price_history::model::PriceHistoryEntry;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::NotificationService;
use crate::domain::product::value_objects::{Price, ReviewState};
use crate::domain::shared::value_objects::BatchId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
        async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError>;
        async fn update_price(&self, id: Uuid, price: Price, last_updated: DateTime<Utc>) -> Result<(), RepositoryError>;
        async fn request_review(&self, ids: &[Uuid], batch_id: &BatchId) -> Result<(), RepositoryError>;
        async fn complete_review(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub HistoryRepo {}

    #[async_trait]
    impl PriceHistoryRepository for HistoryRepo {
        async fn record(&self, entry: &PriceHistoryEntry) -> Result<(), RepositoryError>;
        async fn record_many(&self, entries: &[PriceHistoryEntry]) -> Result<(), RepositoryError>;
        async fn get_all(&self) -> Result<Vec<PriceHistoryEntry>, RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
        async fn update(&self, id: Uuid, patch: &OrderPatch) -> Result<Order, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationService for Notifier {
        async fn notify(&self, title: &str, body: &str);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(name: &str, price: Price) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        price,
        Utc::now(),
        ReviewState::Normal,
    )
}

pub fn make_pending_product(name: &str, price: Price, batch: &str) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        price,
        Utc::now(),
        ReviewState::PendingReview {
            batch_id: BatchId::new(batch),
        },
    )
}

/// Catalog tables kept in memory. Every product write is published to
/// subscribers the way the database trigger does it.
#[derive(Default)]
pub struct InMemoryStore {
    products: Mutex<Vec<Product>>,
    history: Mutex<Vec<PriceHistoryEntry>>,
    orders: Mutex<Vec<Order>>,
    subscribers: Mutex<Vec<mpsc::Sender<ProductChange>>>,
}

impl InMemoryStore {
    pub fn history(&self) -> Vec<PriceHistoryEntry> {
        self.history.lock().unwrap().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn publish(&self, kind: ChangeKind, before: Option<Product>, after: Option<Product>) {
        let change = ProductChange {
            kind,
            before,
            after,
        };
        self.subscribers
            .lock()
            .unwrap()
            .retain(|sender| sender.try_send(change.clone()).is_ok());
    }

    fn modify(&self, id: Uuid, apply: impl FnOnce(&mut Product)) -> Result<(), RepositoryError> {
        let (before, after) = {
            let mut products = self.products.lock().unwrap();
            let product = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            let before = product.clone();
            apply(product);
            (before, product.clone())
        };
        self.publish(ChangeKind::Update, Some(before), Some(after));
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.products();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.products.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError> {
        self.products.lock().unwrap().extend_from_slice(products);
        for product in products {
            self.publish(ChangeKind::Insert, None, Some(product.clone()));
        }
        Ok(())
    }

    async fn update_price(
        &self,
        id: Uuid,
        price: Price,
        last_updated: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        self.modify(id, |product| product.set_price(price, last_updated))
    }

    async fn request_review(
        &self,
        ids: &[Uuid],
        batch_id: &BatchId,
    ) -> Result<(), RepositoryError> {
        for id in ids {
            self.modify(*id, |product| product.request_review(batch_id.clone()))?;
        }
        Ok(())
    }

    async fn complete_review(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.modify(id, |product| {
            product.complete_review();
        })
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepositoryError> {
        let removed: Vec<Product> = {
            let mut products = self.products.lock().unwrap();
            let (removed, kept): (Vec<Product>, Vec<Product>) =
                products.drain(..).partition(|p| ids.contains(&p.id));
            *products = kept;
            removed
        };
        for product in removed {
            self.publish(ChangeKind::Delete, Some(product), None);
        }
        Ok(())
    }
}

#[async_trait]
impl PriceHistoryRepository for InMemoryStore {
    async fn record(&self, entry: &PriceHistoryEntry) -> Result<(), RepositoryError> {
        let mut history = self.history.lock().unwrap();
        match history.iter_mut().find(|e| {
            e.product_id == entry.product_id && e.recorded_date == entry.recorded_date
        }) {
            Some(existing) => existing.price = entry.price,
            None => history.push(entry.clone()),
        }
        Ok(())
    }

    async fn record_many(&self, entries: &[PriceHistoryEntry]) -> Result<(), RepositoryError> {
        for entry in entries {
            self.record(entry).await?;
        }
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<PriceHistoryEntry>, RepositoryError> {
        Ok(self.history())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut orders = self.orders.lock().unwrap().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &OrderPatch) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let patch = patch.clone();
        if let Some(name) = patch.name {
            order.name = name;
        }
        if let Some(items) = patch.items {
            order.items = items;
        }
        if let Some(margin) = patch.global_profit_percent {
            order.global_profit_percent = margin;
        }
        if let Some(delivery) = patch.delivery_cost {
            order.delivery_cost = delivery;
        }
        if let Some(total) = patch.total_price {
            order.total_price = total;
        }
        Ok(order.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogChangeSource for InMemoryStore {
    async fn subscribe(&self) -> Result<ChangeSubscription, RepositoryError> {
        let (sender, receiver) = mpsc::channel(64);
        self.subscribers.lock().unwrap().push(sender);
        Ok(ChangeSubscription::new(receiver, None))
    }
}

/// Notifier that remembers what it was asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn notify(&self, title: &str, body: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }
}
