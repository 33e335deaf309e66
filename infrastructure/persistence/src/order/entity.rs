use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::order::model::{CartItem, Order};

/// Row of `orders`. Cart lines live in `items` as camelCase JSONB.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub name: String,
    pub items: Json<Vec<CartItem>>,
    pub profit_margin: f64,
    pub delivery_cost: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            self.name,
            self.items.0,
            self.profit_margin,
            self.delivery_cost,
            self.total_price,
            self.created_at,
        )
    }

    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.id,
            name: order.name.clone(),
            items: Json(order.items.clone()),
            profit_margin: order.global_profit_percent,
            delivery_cost: order.delivery_cost,
            total_price: order.total_price,
            created_at: order.created_at,
        }
    }
}
