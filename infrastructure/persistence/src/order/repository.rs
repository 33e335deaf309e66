use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderPatch};
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;
use crate::error::classify;

const ORDER_COLUMNS: &str =
    "id, name, items, profit_margin, delivery_cost, total_price, created_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let entity = OrderEntity::from_domain(order);
        sqlx::query(
            r#"INSERT INTO orders (id, name, items, profit_margin, delivery_cost, total_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(entity.id)
        .bind(entity.name)
        .bind(entity.items)
        .bind(entity.profit_margin)
        .bind(entity.delivery_cost)
        .bind(entity.total_price)
        .bind(entity.created_at)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &OrderPatch) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            r#"UPDATE orders SET
                name = COALESCE($2, name),
                items = COALESCE($3, items),
                profit_margin = COALESCE($4, profit_margin),
                delivery_cost = COALESCE($5, delivery_cost),
                total_price = COALESCE($6, total_price)
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}"#
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.items.as_ref().map(Json))
        .bind(patch.global_profit_percent)
        .bind(patch.delivery_cost)
        .bind(patch.total_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
