use chrono::NaiveDate;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::price_history::model::PriceHistoryEntry;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PriceHistoryResponse {
    pub product_id: Uuid,
    pub price: f64,
    pub recorded_date: NaiveDate,
}

impl From<PriceHistoryEntry> for PriceHistoryResponse {
    fn from(entry: PriceHistoryEntry) -> Self {
        Self {
            product_id: entry.product_id,
            price: entry.price,
            recorded_date: entry.recorded_date,
        }
    }
}
