//! Order arithmetic.
//!
//! Inputs arrive as `f64` (catalog prices, percentages) and are lifted to
//! `Decimal` before any multiplication, so totals are exact and replayable.
//! Nothing here rounds; [`round_for_display`] is applied only where a value is
//! rendered.

use rust_decimal::prelude::*;

use super::errors::OrderError;
use super::model::CartItem;
use crate::domain::product::value_objects::Price;

/// Largest price or delivery cost a cart accepts.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;
/// Largest quantity of a single line.
pub const MAX_QUANTITY: u32 = 9_999;
/// Margins are accepted within `-MAX_MARGIN_PERCENT..=MAX_MARGIN_PERCENT`.
pub const MAX_MARGIN_PERCENT: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    pub sub_total: Decimal,
    pub delivery: Decimal,
    pub grand_total: Decimal,
}

/// Finite and within `MAX_MARGIN_PERCENT` either way.
pub fn validate_margin(margin: f64) -> Result<f64, OrderError> {
    if margin.is_finite() && margin.abs() <= MAX_MARGIN_PERCENT {
        Ok(margin)
    } else {
        Err(OrderError::MarginInvalid)
    }
}

/// Finite, non-negative and at most `MAX_AMOUNT`.
pub fn validate_amount(amount: f64) -> Result<f64, OrderError> {
    if amount.is_finite() && (0.0..=MAX_AMOUNT).contains(&amount) {
        Ok(amount)
    } else {
        Err(OrderError::AmountOutOfRange)
    }
}

/// Values `Decimal` cannot hold are an error, never zero.
pub fn to_decimal(value: f64) -> Result<Decimal, OrderError> {
    Decimal::from_f64(value).ok_or(OrderError::AmountOutOfRange)
}

/// Full-precision conversion for storage.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn checked(value: Option<Decimal>) -> Result<Decimal, OrderError> {
    value.ok_or(OrderError::AmountOutOfRange)
}

/// `original_price * (1 + margin / 100)` with the item's override taking
/// precedence over the global margin.
pub fn unit_price(item: &CartItem, global_profit_percent: f64) -> Result<Decimal, OrderError> {
    let price = to_decimal(item.original_price)?;
    let margin = to_decimal(item.effective_margin(global_profit_percent))?;
    let factor = checked(Decimal::ONE.checked_add(margin / Decimal::ONE_HUNDRED))?;
    checked(price.checked_mul(factor))
}

pub fn compute_item_total(
    item: &CartItem,
    global_profit_percent: f64,
) -> Result<Decimal, OrderError> {
    checked(unit_price(item, global_profit_percent)?.checked_mul(Decimal::from(item.quantity)))
}

/// Absent, unparsable and negative delivery costs all count as zero.
pub fn coerce_delivery(delivery_cost: Price) -> Result<Decimal, OrderError> {
    match delivery_cost {
        Price::Priced(value) if value > 0.0 => to_decimal(value),
        _ => Ok(Decimal::ZERO),
    }
}

pub fn compute_order_totals(
    items: &[CartItem],
    global_profit_percent: f64,
    delivery_cost: Price,
) -> Result<OrderTotals, OrderError> {
    let sub_total = items.iter().try_fold(Decimal::ZERO, |sum, item| {
        checked(sum.checked_add(compute_item_total(item, global_profit_percent)?))
    })?;
    let delivery = coerce_delivery(delivery_cost)?;

    Ok(OrderTotals {
        sub_total,
        delivery,
        grand_total: checked(sub_total.checked_add(delivery))?,
    })
}

/// Nearest whole currency unit.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounded amount with `,` thousands grouping, e.g. `1,234,568`.
pub fn format_amount(value: Decimal) -> String {
    let whole = round_for_display(value).to_i128().unwrap_or_default();
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
