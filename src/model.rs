use serde::{Deserialize, Serialize};

/// One orderable line of the cart. `name` doubles as the uniqueness key,
/// there is no separate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub subtotal: f64,
}

impl Item {
    /// Builds an item with the subtotal computed from price and quantity.
    /// Subtotals are never trusted from outside data.
    pub fn new(name: impl Into<String>, price: f64, qty: u32) -> Self {
        let price = price.max(0.0);

        Self {
            name: name.into(),
            price,
            qty,
            subtotal: price * qty as f64,
        }
    }
}

/// The full cart state persisted for the duration of a browsing session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<Item>,
    pub total: f64,
}

impl Order {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_computed() {
        let item = Item::new("Rice", 1500.0, 2);

        assert_eq!(item.subtotal, 3000.0);
    }

    #[test]
    fn test_negative_price_clamped() {
        let item = Item::new("Soup", -5.0, 3);

        assert_eq!(item.price, 0.0);
        assert_eq!(item.subtotal, 0.0);
    }

    #[test]
    fn test_empty_order() {
        let order = Order::empty();

        assert!(order.is_empty());
        assert_eq!(order.total, 0.0);
    }
}
