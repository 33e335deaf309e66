use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{Price, ReviewState};
use crate::domain::shared::value_objects::BatchId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Price,
    pub last_updated: DateTime<Utc>,
    pub review: ReviewState,
}

pub struct NewProductProps {
    pub name: String,
    pub price: Price,
}

/// Rejects prices a catalog row may not hold.
pub fn validate_price(price: Price) -> Result<Price, ProductError> {
    match price {
        Price::Priced(value) if value < 0.0 => Err(ProductError::PriceNegative),
        other => Ok(other),
    }
}

impl Product {
    /// New products start unflagged; the name is stored trimmed.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }
        let price = validate_price(props.price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            last_updated: Utc::now(),
            review: ReviewState::Normal,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Price,
        last_updated: DateTime<Utc>,
        review: ReviewState,
    ) -> Self {
        Self {
            id,
            name,
            price,
            last_updated,
            review,
        }
    }

    pub fn is_review_requested(&self) -> bool {
        self.review.is_pending()
    }

    /// Normal -> PendingReview. Re-flagging moves the product to the new batch.
    pub fn request_review(&mut self, batch_id: BatchId) {
        self.review = ReviewState::PendingReview { batch_id };
    }

    /// PendingReview -> Normal. Returns whether a transition happened.
    pub fn complete_review(&mut self) -> bool {
        let was_pending = self.review.is_pending();
        self.review = ReviewState::Normal;
        was_pending
    }

    pub fn set_price(&mut self, price: Price, at: DateTime<Utc>) {
        self.price = price;
        self.last_updated = at;
    }
}

/// True when an update flips a product from Normal to PendingReview.
pub fn entered_review(before: &Product, after: &Product) -> bool {
    after.is_review_requested() && !before.is_review_requested()
}
