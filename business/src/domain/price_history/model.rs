use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::model::Product;

/// One ledger line: the price of a product on a calendar day.
/// `(product_id, recorded_date)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub product_id: Uuid,
    pub price: f64,
    pub recorded_date: NaiveDate,
}

impl PriceHistoryEntry {
    pub fn new(product_id: Uuid, price: f64, recorded_date: NaiveDate) -> Self {
        Self {
            product_id,
            price,
            recorded_date,
        }
    }

    /// Ledger line for a product's current price, if it has one.
    pub fn for_product(product: &Product, recorded_date: NaiveDate) -> Option<Self> {
        product
            .price
            .amount()
            .map(|price| Self::new(product.id, price, recorded_date))
    }
}

/// The ledger's calendar day. Days are UTC days.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
