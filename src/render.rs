//! Presentational output for the live menu summary and the checkout view.
//! No business logic lives here.
use crate::model::{Item, Order};

pub const NO_ITEMS_SELECTED: &str = "No items selected yet.";
pub const NO_ITEMS_FOUND: &str = "No items found. Go back to menu.";

/// Formats an amount with thousands grouping, fraction kept only when
/// non-integral.
pub fn format_amount(n: f64) -> String {
    // round to three decimals before splitting so a carry lands in the
    // whole part
    let n = (n * 1000.0).round() / 1000.0;
    let whole = n.trunc() as i64;
    let mut grouped = group_digits(whole.unsigned_abs());

    if whole < 0 {
        grouped.insert(0, '-');
    }

    let fraction = format!("{:.3}", n.fract().abs());
    let fraction = fraction
        .strip_prefix('0')
        .unwrap_or(&fraction)
        .trim_end_matches('0');
    if fraction.len() > 1 {
        grouped.push_str(fraction);
    }

    grouped
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// One display line, `qty × name — ₦subtotal`.
pub fn order_line(item: &Item, currency: &str) -> String {
    format!(
        "{} × {} — {}{}",
        item.qty,
        item.name,
        currency,
        format_amount(item.subtotal)
    )
}

/// All display lines for an order, or the given empty-state message.
pub fn order_lines(order: &Order, currency: &str, empty_message: &str) -> Vec<String> {
    if order.is_empty() {
        return vec![empty_message.to_string()];
    }

    order
        .items
        .iter()
        .map(|item| order_line(item, currency))
        .collect()
}
