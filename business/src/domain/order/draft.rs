use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::OrderError;
use super::model::{CartItem, NewOrderProps, Order, OrderPatch};
use super::pricing::{
    MAX_AMOUNT, MAX_QUANTITY, OrderTotals, coerce_delivery, compute_order_totals, to_f64,
    validate_amount, validate_margin,
};
use super::receipt::render_receipt;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Price, PriceInput, sanitize};

/// The unsaved cart being assembled by a session.
///
/// When `editing_id` is set the draft was loaded from a saved order and the
/// next save overwrites that order instead of inserting a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderDraft {
    pub name: String,
    pub items: Vec<CartItem>,
    pub global_profit_percent: f64,
    pub delivery_cost: Price,
    pub editing_id: Option<Uuid>,
}

/// What a save writes, and where.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftSubmission {
    Insert(NewOrderProps),
    Update(Uuid, OrderPatch),
}

pub fn default_order_name(at: DateTime<Utc>) -> String {
    format!("طلب {} - {}", at.format("%d/%m/%Y"), at.format("%H:%M"))
}

impl OrderDraft {
    /// Adds one unit of `product`. Adding a product already in the cart bumps
    /// its quantity and keeps the original snapshot.
    pub fn add_product(&mut self, product: &Product) -> Result<&CartItem, OrderError> {
        let Some(price) = product.price.amount() else {
            return Err(OrderError::ProductUnpriced);
        };
        let price = validate_amount(price)?;

        let index = match self.position(product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1).min(MAX_QUANTITY);
                index
            }
            None => {
                self.items
                    .push(CartItem::new(product.id, product.name.clone(), price));
                self.items.len() - 1
            }
        };
        Ok(&self.items[index])
    }

    /// Quantity stays within `1..=MAX_QUANTITY`; removal is explicit.
    pub fn change_quantity(&mut self, product_id: Uuid, delta: i64) -> Result<u32, OrderError> {
        let item = self.item_mut(product_id)?;
        let next = i64::from(item.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(MAX_QUANTITY));
        item.quantity = u32::try_from(next).unwrap_or(1);
        Ok(item.quantity)
    }

    /// `None` clears the override so the line follows the global margin again.
    pub fn set_item_profit(
        &mut self,
        product_id: Uuid,
        percent: Option<f64>,
    ) -> Result<(), OrderError> {
        let percent = percent.map(validate_margin).transpose()?;
        self.item_mut(product_id)?.item_profit_percent = percent;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: Uuid) -> Result<CartItem, OrderError> {
        let index = self.position(product_id).ok_or(OrderError::ItemNotFound)?;
        Ok(self.items.remove(index))
    }

    pub fn set_global_profit(&mut self, percent: f64) -> Result<(), OrderError> {
        self.global_profit_percent = validate_margin(percent)?;
        Ok(())
    }

    /// Unparsable or non-positive input counts as no delivery.
    pub fn set_delivery_cost(&mut self, input: &PriceInput) -> Result<(), OrderError> {
        let cost = sanitize(input);
        if let Price::Priced(value) = cost {
            if value > MAX_AMOUNT {
                return Err(OrderError::AmountOutOfRange);
            }
        }
        self.delivery_cost = cost;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    /// Replaces the whole draft with a saved order and points at it. An
    /// order whose totals cannot be computed leaves the draft untouched.
    pub fn load(&mut self, order: &Order) -> Result<(), OrderError> {
        let loaded = Self {
            name: order.name.clone(),
            items: order.items.clone(),
            global_profit_percent: order.global_profit_percent,
            delivery_cost: Price::Priced(order.delivery_cost),
            editing_id: Some(order.id),
        };
        loaded.totals()?;
        *self = loaded;
        Ok(())
    }

    /// Clears the cart after a save. The global margin is a working setting
    /// and survives.
    pub fn reset(&mut self) {
        *self = Self {
            global_profit_percent: self.global_profit_percent,
            ..Self::default()
        };
    }

    pub fn totals(&self) -> Result<OrderTotals, OrderError> {
        compute_order_totals(&self.items, self.global_profit_percent, self.delivery_cost)
    }

    pub fn receipt(&self) -> Result<String, OrderError> {
        render_receipt(
            &self.name,
            &self.items,
            self.global_profit_percent,
            &self.totals()?,
        )
    }

    /// Freezes the draft into the write a save performs. The stored total is
    /// the unrounded grand total.
    pub fn submission(&self, at: DateTime<Utc>) -> Result<DraftSubmission, OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::CartEmpty);
        }
        validate_margin(self.global_profit_percent)?;

        let name = if self.name.trim().is_empty() {
            default_order_name(at)
        } else {
            self.name.trim().to_string()
        };
        let delivery_cost = to_f64(coerce_delivery(self.delivery_cost)?);
        let total_price = to_f64(self.totals()?.grand_total);

        Ok(match self.editing_id {
            Some(id) => DraftSubmission::Update(
                id,
                OrderPatch {
                    name: Some(name),
                    items: Some(self.items.clone()),
                    global_profit_percent: Some(self.global_profit_percent),
                    delivery_cost: Some(delivery_cost),
                    total_price: Some(total_price),
                },
            ),
            None => DraftSubmission::Insert(NewOrderProps {
                name,
                items: self.items.clone(),
                global_profit_percent: self.global_profit_percent,
                delivery_cost,
                total_price,
            }),
        })
    }

    fn position(&self, product_id: Uuid) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }

    fn item_mut(&mut self, product_id: Uuid) -> Result<&mut CartItem, OrderError> {
        self.items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(OrderError::ItemNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use chrono::TimeZone;

    fn product(name: &str, price: Price) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price,
        })
        .unwrap()
    }

    #[test]
    fn should_reject_unpriced_product() {
        let mut draft = OrderDraft::default();
        let result = draft.add_product(&product("Lentils", Price::Unpriced));

        assert!(matches!(result.unwrap_err(), OrderError::ProductUnpriced));
        assert!(draft.items.is_empty());
    }

    #[test]
    fn should_increment_quantity_when_adding_same_product() {
        let mut draft = OrderDraft::default();
        let tea = product("Tea", Price::Priced(1000.0));

        draft.add_product(&tea).unwrap();
        let item = draft.add_product(&tea).unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn should_keep_quantity_at_least_one() {
        let mut draft = OrderDraft::default();
        let tea = product("Tea", Price::Priced(1000.0));
        draft.add_product(&tea).unwrap();

        assert_eq!(draft.change_quantity(tea.id, -5).unwrap(), 1);
        assert_eq!(draft.change_quantity(tea.id, 3).unwrap(), 4);
    }

    #[test]
    fn should_fail_to_change_missing_item() {
        let mut draft = OrderDraft::default();
        let result = draft.change_quantity(Uuid::new_v4(), 1);
        assert!(matches!(result.unwrap_err(), OrderError::ItemNotFound));
    }

    #[test]
    fn should_reject_non_finite_margins() {
        let mut draft = OrderDraft::default();
        assert!(matches!(
            draft.set_global_profit(f64::NAN).unwrap_err(),
            OrderError::MarginInvalid
        ));
        assert!(draft.set_global_profit(-20.0).is_ok());
        assert!(draft.set_global_profit(250.0).is_ok());
    }

    #[test]
    fn should_sanitize_delivery_cost() {
        let mut draft = OrderDraft::default();
        draft.set_delivery_cost(&PriceInput::from("1,500")).unwrap();
        assert_eq!(draft.delivery_cost, Price::Priced(1500.0));

        draft.set_delivery_cost(&PriceInput::from("abc")).unwrap();
        assert_eq!(draft.delivery_cost, Price::Unpriced);
    }

    #[test]
    fn should_build_insert_with_default_name_and_unrounded_total() {
        let mut draft = OrderDraft::default();
        let tea = product("Tea", Price::Priced(1000.0));
        draft.add_product(&tea).unwrap();
        draft.change_quantity(tea.id, 1).unwrap();
        draft.set_global_profit(10.0).unwrap();
        draft.set_delivery_cost(&PriceInput::Number(300.0)).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();

        let DraftSubmission::Insert(props) = draft.submission(at).unwrap() else {
            panic!("expected insert");
        };

        assert_eq!(props.name, "طلب 07/03/2024 - 09:05");
        assert_eq!(props.total_price, 2500.0);
        assert_eq!(props.delivery_cost, 300.0);
    }

    #[test]
    fn should_build_update_when_editing_loaded_order() {
        let order = Order::new(NewOrderProps {
            name: "Saved".to_string(),
            items: vec![CartItem::new(Uuid::new_v4(), "Tea".to_string(), 100.0)],
            global_profit_percent: 5.0,
            delivery_cost: 20.0,
            total_price: 125.0,
        })
        .unwrap();
        let mut draft = OrderDraft::default();
        draft.load(&order).unwrap();

        let DraftSubmission::Update(id, patch) = draft.submission(Utc::now()).unwrap() else {
            panic!("expected update");
        };

        assert_eq!(id, order.id);
        assert_eq!(patch.name.as_deref(), Some("Saved"));
        assert_eq!(patch.items.as_ref().map(Vec::len), Some(1));
        assert_eq!(patch.total_price, Some(125.0));
    }

    #[test]
    fn should_refuse_to_submit_empty_cart() {
        let draft = OrderDraft::default();
        assert!(matches!(
            draft.submission(Utc::now()).unwrap_err(),
            OrderError::CartEmpty
        ));
    }

    #[test]
    fn should_replace_draft_on_load_and_clear_pointer_on_reset() {
        let mut draft = OrderDraft::default();
        draft
            .add_product(&product("Sugar", Price::Priced(31000.0)))
            .unwrap();
        let order = Order::new(NewOrderProps {
            name: "Saved".to_string(),
            items: vec![CartItem::new(Uuid::new_v4(), "Tea".to_string(), 100.0)],
            global_profit_percent: 15.0,
            delivery_cost: 0.0,
            total_price: 115.0,
        })
        .unwrap();

        draft.load(&order).unwrap();
        assert_eq!(draft.items, order.items);
        assert_eq!(draft.editing_id, Some(order.id));

        draft.reset();
        assert!(draft.items.is_empty());
        assert!(draft.editing_id.is_none());
        assert!(draft.name.is_empty());
        assert_eq!(draft.global_profit_percent, 15.0);
    }

    #[test]
    fn should_reject_product_priced_beyond_cart_limit() {
        let mut draft = OrderDraft::default();
        let result = draft.add_product(&product("Gold", Price::Priced(1e25)));

        assert!(matches!(result.unwrap_err(), OrderError::AmountOutOfRange));
        assert!(draft.items.is_empty());
    }

    #[test]
    fn should_cap_quantity_and_keep_totals_computable() {
        let mut draft = OrderDraft::default();
        let tea = product("Tea", Price::Priced(MAX_AMOUNT));
        draft.add_product(&tea).unwrap();

        assert_eq!(draft.change_quantity(tea.id, 9_999).unwrap(), MAX_QUANTITY);
        assert_eq!(draft.change_quantity(tea.id, i64::MAX).unwrap(), MAX_QUANTITY);
        assert_eq!(draft.add_product(&tea).unwrap().quantity, MAX_QUANTITY);
        assert!(draft.totals().is_ok());
        assert!(draft.receipt().is_ok());
    }

    #[test]
    fn should_reject_margins_beyond_limit() {
        let mut draft = OrderDraft::default();
        let tea = product("Tea", Price::Priced(1000.0));
        draft.add_product(&tea).unwrap();

        assert!(matches!(
            draft.set_global_profit(1e30).unwrap_err(),
            OrderError::MarginInvalid
        ));
        assert!(matches!(
            draft.set_item_profit(tea.id, Some(-1e30)).unwrap_err(),
            OrderError::MarginInvalid
        ));
        assert_eq!(draft.global_profit_percent, 0.0);
        assert_eq!(draft.items[0].item_profit_percent, None);
    }

    #[test]
    fn should_reject_delivery_cost_beyond_limit() {
        let mut draft = OrderDraft::default();
        draft.set_delivery_cost(&PriceInput::Number(300.0)).unwrap();

        assert!(matches!(
            draft.set_delivery_cost(&PriceInput::Number(1e30)).unwrap_err(),
            OrderError::AmountOutOfRange
        ));
        assert_eq!(draft.delivery_cost, Price::Priced(300.0));
    }

    #[test]
    fn should_refuse_to_load_order_with_uncomputable_totals() {
        let mut draft = OrderDraft::default();
        draft
            .add_product(&product("Sugar", Price::Priced(31000.0)))
            .unwrap();
        let before = draft.clone();
        let order = Order::from_repository(
            Uuid::new_v4(),
            "Corrupt".to_string(),
            vec![CartItem {
                quantity: 10_000,
                ..CartItem::new(Uuid::new_v4(), "Gold".to_string(), 1e25)
            }],
            0.0,
            0.0,
            0.0,
            Utc::now(),
        );

        assert!(matches!(
            draft.load(&order).unwrap_err(),
            OrderError::AmountOutOfRange
        ));
        assert_eq!(draft, before);
    }
}
