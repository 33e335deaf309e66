use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::price_history::model::PriceHistoryEntry;
use business::domain::price_history::repository::PriceHistoryRepository;

use super::entity::PriceHistoryEntity;
use crate::error::classify;

pub struct PriceHistoryRepositoryPostgres {
    pool: PgPool,
}

impl PriceHistoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// One entry per `(product_id, recorded_date)`, the last one winning.
/// A single upsert statement may not touch the same row twice.
fn latest_per_key(entries: &[PriceHistoryEntry]) -> Vec<&PriceHistoryEntry> {
    let mut positions: HashMap<(Uuid, NaiveDate), usize> = HashMap::new();
    let mut unique: Vec<&PriceHistoryEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match positions.get(&(entry.product_id, entry.recorded_date)) {
            Some(&index) => unique[index] = entry,
            None => {
                positions.insert((entry.product_id, entry.recorded_date), unique.len());
                unique.push(entry);
            }
        }
    }
    unique
}

#[async_trait]
impl PriceHistoryRepository for PriceHistoryRepositoryPostgres {
    async fn record(&self, entry: &PriceHistoryEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO price_history (product_id, price, recorded_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id, recorded_date) DO UPDATE SET price = EXCLUDED.price"#,
        )
        .bind(entry.product_id)
        .bind(entry.price)
        .bind(entry.recorded_date)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn record_many(&self, entries: &[PriceHistoryEntry]) -> Result<(), RepositoryError> {
        let unique = latest_per_key(entries);
        if unique.is_empty() {
            return Ok(());
        }

        let product_ids: Vec<Uuid> = unique.iter().map(|e| e.product_id).collect();
        let prices: Vec<f64> = unique.iter().map(|e| e.price).collect();
        let dates: Vec<NaiveDate> = unique.iter().map(|e| e.recorded_date).collect();

        sqlx::query(
            r#"
            INSERT INTO price_history (product_id, price, recorded_date)
            SELECT * FROM UNNEST($1::uuid[], $2::double precision[], $3::date[])
            ON CONFLICT (product_id, recorded_date) DO UPDATE SET price = EXCLUDED.price
            "#,
        )
        .bind(&product_ids)
        .bind(&prices)
        .bind(&dates)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<PriceHistoryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, PriceHistoryEntity>(
            "SELECT product_id, price, recorded_date FROM price_history ORDER BY recorded_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
