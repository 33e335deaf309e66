use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Price;
use business::domain::shared::value_objects::BatchId;

use super::entity::ProductEntity;
use crate::error::classify;

const PRODUCT_COLUMNS: &str =
    "id, name, price, last_updated, is_review_requested, review_batch_id";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(classify)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError> {
        if products.is_empty() {
            return Ok(());
        }

        let rows: Vec<ProductEntity> = products.iter().map(ProductEntity::from_domain).collect();
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
        let prices: Vec<Option<f64>> = rows.iter().map(|r| r.price).collect();
        let updated: Vec<DateTime<Utc>> = rows.iter().map(|r| r.last_updated).collect();
        let flags: Vec<bool> = rows.iter().map(|r| r.is_review_requested).collect();
        let batches: Vec<Option<String>> = rows.iter().map(|r| r.review_batch_id.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, last_updated, is_review_requested, review_batch_id)
            SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::double precision[], $4::timestamptz[], $5::boolean[], $6::text[])
            "#,
        )
        .bind(&ids)
        .bind(&names)
        .bind(&prices)
        .bind(&updated)
        .bind(&flags)
        .bind(&batches)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn update_price(
        &self,
        id: Uuid,
        price: Price,
        last_updated: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET price = $2, last_updated = $3 WHERE id = $1")
            .bind(id)
            .bind(price.amount())
            .bind(last_updated)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn request_review(
        &self,
        ids: &[Uuid],
        batch_id: &BatchId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE products SET is_review_requested = TRUE, review_batch_id = $2 WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(batch_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn complete_review(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET is_review_requested = FALSE, review_batch_id = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(())
    }
}
