use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::{Product, entered_review};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl std::str::FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INSERT" => Ok(ChangeKind::Insert),
            "UPDATE" => Ok(ChangeKind::Update),
            "DELETE" => Ok(ChangeKind::Delete),
            _ => Err(format!("Invalid change kind: {}", s)),
        }
    }
}

/// A row-level change on the products table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChange {
    pub kind: ChangeKind,
    pub before: Option<Product>,
    pub after: Option<Product>,
}

impl ProductChange {
    /// The product that just entered review, when this change is that
    /// Normal -> PendingReview update.
    pub fn review_requested(&self) -> Option<&Product> {
        if self.kind != ChangeKind::Update {
            return None;
        }
        match (&self.before, &self.after) {
            (Some(before), Some(after)) if entered_review(before, after) => Some(after),
            _ => None,
        }
    }
}

/// Live feed of product changes. Dropping it or calling
/// [`ChangeSubscription::unsubscribe`] tears the listener down.
pub struct ChangeSubscription {
    receiver: mpsc::Receiver<ProductChange>,
    listener: Option<JoinHandle<()>>,
}

impl ChangeSubscription {
    /// `listener` is the task feeding `receiver`, aborted on teardown.
    pub fn new(receiver: mpsc::Receiver<ProductChange>, listener: Option<JoinHandle<()>>) -> Self {
        Self { receiver, listener }
    }

    /// Next change, or `None` once the feed has closed.
    pub async fn next(&mut self) -> Option<ProductChange> {
        self.receiver.recv().await
    }

    pub fn unsubscribe(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.receiver.close();
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Change-notification primitive of the store, scoped to the products table.
#[async_trait]
pub trait CatalogChangeSource: Send + Sync {
    async fn subscribe(&self) -> Result<ChangeSubscription, RepositoryError>;
}
