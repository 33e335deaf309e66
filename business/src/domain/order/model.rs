use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;

/// A cart line. `name` and `original_price` are copied when the product is
/// added and never follow later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub original_price: f64,
    pub quantity: u32,
    /// Overrides the order's global margin for this line.
    #[serde(
        rename = "itemProfit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub item_profit_percent: Option<f64>,
}

impl CartItem {
    pub fn new(product_id: Uuid, name: String, original_price: f64) -> Self {
        Self {
            product_id,
            name,
            original_price,
            quantity: 1,
            item_profit_percent: None,
        }
    }

    pub fn effective_margin(&self, global_profit_percent: f64) -> f64 {
        self.item_profit_percent.unwrap_or(global_profit_percent)
    }
}

/// A persisted order: an immutable receipt of the cart at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<CartItem>,
    pub global_profit_percent: f64,
    pub delivery_cost: f64,
    /// Grand total as computed when saved; never recomputed on read.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderProps {
    pub name: String,
    pub items: Vec<CartItem>,
    pub global_profit_percent: f64,
    pub delivery_cost: f64,
    pub total_price: f64,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        if props.items.is_empty() {
            return Err(OrderError::CartEmpty);
        }
        if props.name.trim().is_empty() {
            return Err(OrderError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            items: props.items,
            global_profit_percent: props.global_profit_percent,
            delivery_cost: props.delivery_cost,
            total_price: props.total_price,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        items: Vec<CartItem>,
        global_profit_percent: f64,
        delivery_cost: f64,
        total_price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            items,
            global_profit_percent,
            delivery_cost,
            total_price,
            created_at,
        }
    }
}

/// Partial update of a saved order. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub name: Option<String>,
    pub items: Option<Vec<CartItem>>,
    pub global_profit_percent: Option<f64>,
    pub delivery_cost: Option<f64>,
    pub total_price: Option<f64>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self == &OrderPatch::default()
    }
}
