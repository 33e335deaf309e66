use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::price_history::model::PriceHistoryEntry;

#[derive(Debug, FromRow)]
pub struct PriceHistoryEntity {
    pub product_id: Uuid,
    pub price: f64,
    pub recorded_date: NaiveDate,
}

impl PriceHistoryEntity {
    pub fn into_domain(self) -> PriceHistoryEntry {
        PriceHistoryEntry::new(self.product_id, self.price, self.recorded_date)
    }
}
