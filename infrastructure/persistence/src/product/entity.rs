use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ReviewState};

/// Row of `products`. Also the shape of `row_to_json` in change payloads.
#[derive(Debug, Clone, FromRow, Deserialize)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: Option<f64>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub is_review_requested: bool,
    #[serde(default)]
    pub review_batch_id: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            Price::from_column(self.price),
            self.last_updated,
            ReviewState::from_columns(self.is_review_requested, self.review_batch_id),
        )
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.amount(),
            last_updated: product.last_updated,
            is_review_requested: product.review.is_pending(),
            review_batch_id: product.review.batch_id().map(|b| b.as_str().to_string()),
        }
    }
}
