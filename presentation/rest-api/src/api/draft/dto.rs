use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::draft::OrderDraft;
use business::domain::order::errors::OrderError;
use business::domain::order::model::CartItem;
use business::domain::order::pricing::{
    OrderTotals, compute_item_total, format_amount, round_for_display, to_f64, unit_price,
};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DraftItemResponse {
    pub product_id: Uuid,
    pub name: String,
    pub original_price: f64,
    pub quantity: u32,
    pub item_profit_percent: Option<f64>,
    /// Price after margin, rounded to whole units
    pub unit_price: f64,
    pub line_total: f64,
}

impl DraftItemResponse {
    fn new(item: &CartItem, global_profit_percent: f64) -> Result<Self, OrderError> {
        Ok(Self {
            product_id: item.product_id,
            name: item.name.clone(),
            original_price: item.original_price,
            quantity: item.quantity,
            item_profit_percent: item.item_profit_percent,
            unit_price: to_f64(round_for_display(unit_price(item, global_profit_percent)?)),
            line_total: to_f64(round_for_display(compute_item_total(
                item,
                global_profit_percent,
            )?)),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DraftTotalsResponse {
    pub sub_total: f64,
    pub delivery: f64,
    pub grand_total: f64,
    /// Grand total as printed on the receipt, e.g. `2,500`
    pub grand_total_display: String,
}

impl From<OrderTotals> for DraftTotalsResponse {
    fn from(totals: OrderTotals) -> Self {
        Self {
            sub_total: to_f64(round_for_display(totals.sub_total)),
            delivery: to_f64(round_for_display(totals.delivery)),
            grand_total: to_f64(round_for_display(totals.grand_total)),
            grand_total_display: format_amount(totals.grand_total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DraftResponse {
    pub name: String,
    pub items: Vec<DraftItemResponse>,
    pub global_profit_percent: f64,
    /// Null while unset or unparsable; counts as zero in totals
    pub delivery_cost: Option<f64>,
    /// Saved order this draft overwrites on save
    pub editing_order_id: Option<Uuid>,
    pub totals: DraftTotalsResponse,
}

impl TryFrom<&OrderDraft> for DraftResponse {
    type Error = OrderError;

    fn try_from(draft: &OrderDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: draft.name.clone(),
            items: draft
                .items
                .iter()
                .map(|item| DraftItemResponse::new(item, draft.global_profit_percent))
                .collect::<Result<_, _>>()?,
            global_profit_percent: draft.global_profit_percent,
            delivery_cost: draft.delivery_cost.amount(),
            editing_order_id: draft.editing_id,
            totals: draft.totals()?.into(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddDraftItemRequest {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateDraftItemRequest {
    /// Added to the quantity; the result stays between 1 and 9999
    pub quantity_delta: Option<i64>,
    pub item_profit_percent: Option<f64>,
    /// Drops the override so the line follows the global margin
    #[oai(default)]
    #[serde(default)]
    pub clear_item_profit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DraftSettingsRequest {
    pub name: Option<String>,
    pub global_profit_percent: Option<f64>,
    /// Number or formatted string
    pub delivery_cost: Option<serde_json::Value>,
}
