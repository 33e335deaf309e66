use std::fmt::Write;

use rust_decimal::Decimal;

use super::errors::OrderError;
use super::model::CartItem;
use super::pricing::{OrderTotals, compute_item_total, format_amount};

pub const UNNAMED_ORDER_TITLE: &str = "بدون رقم";

/// Customer-facing receipt. Item lines follow cart order; the delivery line
/// is only present when delivery is charged.
pub fn render_receipt(
    title: &str,
    items: &[CartItem],
    global_profit_percent: f64,
    totals: &OrderTotals,
) -> Result<String, OrderError> {
    let title = match title.trim() {
        "" => UNNAMED_ORDER_TITLE,
        trimmed => trimmed,
    };

    let mut receipt = String::new();
    receipt.push_str("✅ تم استلام طلبك\n");
    let _ = writeln!(receipt, "رقم الطلب: {title}");
    receipt.push('\n');
    receipt.push_str("المنتجات:\n");
    for item in items {
        let _ = writeln!(
            receipt,
            "{} × {} = {}",
            item.name,
            item.quantity,
            format_amount(compute_item_total(item, global_profit_percent)?)
        );
    }
    receipt.push('\n');
    let _ = writeln!(receipt, "💰 الإجمالي: {} جنيه", format_amount(totals.sub_total));
    if totals.delivery > Decimal::ZERO {
        let _ = writeln!(receipt, "🚚 التوصيل: {} جنيه", format_amount(totals.delivery));
    }
    let _ = writeln!(
        receipt,
        "الاجمالي الكلي: {} جنية",
        format_amount(totals.grand_total)
    );
    receipt.push_str("📦 التسليم اليوم مساءً إن شاء الله\n");
    receipt.push('\n');
    receipt.push_str("شكرًا لثقتك 🌸");
    Ok(receipt)
}
