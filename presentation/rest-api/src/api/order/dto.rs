use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{CartItem, Order};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: Uuid,
    pub name: String,
    /// Catalog price when the product was added
    pub original_price: f64,
    pub quantity: u32,
    pub item_profit_percent: Option<f64>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            original_price: item.original_price,
            quantity: item.quantity,
            item_profit_percent: item.item_profit_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<CartItemResponse>,
    pub global_profit_percent: f64,
    pub delivery_cost: f64,
    /// Grand total stored at save time
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            name: order.name,
            items: order.items.into_iter().map(|i| i.into()).collect(),
            global_profit_percent: order.global_profit_percent,
            delivery_cost: order.delivery_cost,
            total_price: order.total_price,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RenameOrderRequest {
    pub name: String,
}
