//! # Page wiring
//!
//! One initialization flow per page surface, each holding its own injected
//! collaborators instead of globally queried ones. A page that lacks a mount
//! simply skips rendering into it, which is what lets the same logic run
//! unmodified across pages carrying only a subset of the features.
use chrono::{Datelike, Local};
use tracing::warn;

use crate::{
    merge::merge,
    model::Order,
    render::{format_amount, order_lines, NO_ITEMS_FOUND, NO_ITEMS_SELECTED},
    scanner::PageScanner,
    store::{OrderStore, SessionStore},
};

/// Mount point a renderer writes display lines into.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextMount {
    pub lines: Vec<String>,
}

impl TextMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Menu page: quantity inputs feed the scan → merge → save → render cycle.
pub struct MenuPage<P: PageScanner, S: SessionStore> {
    scanner: P,
    store: OrderStore<S>,
    currency: String,
    pub order_list: Option<TextMount>,
    pub total_elem: Option<TextMount>,
}

impl<P: PageScanner, S: SessionStore> MenuPage<P, S> {
    pub fn new(
        scanner: P,
        store: OrderStore<S>,
        currency: impl Into<String>,
        order_list: Option<TextMount>,
        total_elem: Option<TextMount>,
    ) -> Self {
        Self {
            scanner,
            store,
            currency: currency.into(),
            order_list,
            total_elem,
        }
    }

    /// Runs once at page init and again on every quantity input event.
    pub fn refresh(&mut self) -> Order {
        let page_items = self.scanner.scan();
        let stored = self.store.load();
        let merged = merge(&stored.items, &page_items);

        if let Err(e) = self.store.save(&merged) {
            warn!("Failed to persist order: {e}");
        }

        if let Some(list) = &mut self.order_list {
            list.lines = order_lines(&merged, &self.currency, NO_ITEMS_SELECTED);
        }

        if let Some(total) = &mut self.total_elem {
            total.lines = vec![format_amount(merged.total)];
        }

        merged
    }

    pub fn scanner_mut(&mut self) -> &mut P {
        &mut self.scanner
    }

    pub fn into_session(self) -> S {
        self.store.into_session()
    }
}

/// Outcome of a checkout submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

impl SubmitOutcome {
    /// User-facing notice shown as a blocking alert.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "Order submitted successfully!",
            SubmitOutcome::Rejected => "Your order is empty.",
        }
    }
}

/// Checkout page: renders from stored data only, no scan and no merge.
pub struct CheckoutPage<S: SessionStore> {
    store: OrderStore<S>,
    currency: String,
    pub order_list: Option<TextMount>,
    pub total_elem: Option<TextMount>,
}

impl<S: SessionStore> CheckoutPage<S> {
    pub fn new(
        store: OrderStore<S>,
        currency: impl Into<String>,
        order_list: Option<TextMount>,
        total_elem: Option<TextMount>,
    ) -> Self {
        Self {
            store,
            currency: currency.into(),
            order_list,
            total_elem,
        }
    }

    pub fn render(&mut self) -> Order {
        let order = self.store.load();

        if let Some(list) = &mut self.order_list {
            list.lines = order_lines(&order, &self.currency, NO_ITEMS_FOUND);
        }

        if let Some(total) = &mut self.total_elem {
            total.lines = vec![format_amount(order.total)];
        }

        order
    }

    /// Terminal submit action. An empty order is rejected with no state
    /// change; success clears the stored record.
    pub fn submit(&mut self) -> SubmitOutcome {
        let order = self.store.load();

        if order.is_empty() {
            return SubmitOutcome::Rejected;
        }

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear order after submit: {e}");
        }

        SubmitOutcome::Accepted
    }
}

/// Mobile nav state: toggle on the button, dismiss on any click outside the
/// header.
#[derive(Debug, Default)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> char {
        if self.open {
            '✕'
        } else {
            '☰'
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }
}

/// Current calendar year for the auto-year footer spans.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        scanner::{CardScanner, MenuCard},
        store::MemorySession,
    };

    fn card(name: &str, price: f64, qty: &str) -> MenuCard {
        MenuCard {
            name: name.to_string(),
            price_attr: Some(price),
            price_text: String::new(),
            qty_value: qty.to_string(),
        }
    }

    fn order_store() -> OrderStore<MemorySession> {
        OrderStore::new("ultrakitchen_last_order", MemorySession::new())
    }

    #[test]
    fn test_menu_refresh_renders_and_persists() {
        let scanner = CardScanner::new(vec![card("Jollof Rice", 1500.0, "2")]);
        let mut page = MenuPage::new(
            scanner,
            order_store(),
            "₦",
            Some(TextMount::new()),
            Some(TextMount::new()),
        );

        let order = page.refresh();

        assert_eq!(order.total, 3000.0);
        assert_eq!(
            page.order_list.as_ref().unwrap().lines,
            vec!["2 × Jollof Rice — ₦3,000".to_string()]
        );
        assert_eq!(page.total_elem.as_ref().unwrap().text(), "3,000");
    }

    #[test]
    fn test_menu_without_mounts_still_merges() {
        let scanner = CardScanner::new(vec![card("Soup", 700.0, "1")]);
        let mut page = MenuPage::new(scanner, order_store(), "₦", None, None);

        let order = page.refresh();

        assert_eq!(order.total, 700.0);
    }

    #[test]
    fn test_empty_menu_shows_message() {
        let scanner = CardScanner::new(vec![card("Soup", 700.0, "0")]);
        let mut page = MenuPage::new(scanner, order_store(), "₦", Some(TextMount::new()), None);

        page.refresh();

        assert_eq!(
            page.order_list.as_ref().unwrap().text(),
            NO_ITEMS_SELECTED.to_string()
        );
    }

    #[test]
    fn test_checkout_renders_stored_order() {
        let mut store = order_store();
        store
            .save(&merge(&[], &CardScanner::new(vec![card("Suya", 2000.0, "2")]).scan()))
            .unwrap();

        let mut page = CheckoutPage::new(store, "₦", Some(TextMount::new()), Some(TextMount::new()));
        page.render();

        assert_eq!(
            page.order_list.as_ref().unwrap().lines,
            vec!["2 × Suya — ₦4,000".to_string()]
        );
        assert_eq!(page.total_elem.as_ref().unwrap().text(), "4,000");
    }

    #[test]
    fn test_checkout_empty_state() {
        let mut page = CheckoutPage::new(
            order_store(),
            "₦",
            Some(TextMount::new()),
            Some(TextMount::new()),
        );

        page.render();

        assert_eq!(page.order_list.as_ref().unwrap().text(), NO_ITEMS_FOUND);
        assert_eq!(page.total_elem.as_ref().unwrap().text(), "0");
    }

    #[test]
    fn test_submit_empty_rejected_without_state_change() {
        let mut page = CheckoutPage::new(order_store(), "₦", None, None);

        assert_eq!(page.submit(), SubmitOutcome::Rejected);
        assert_eq!(page.submit().message(), "Your order is empty.");
    }

    #[test]
    fn test_submit_clears_order() {
        let mut store = order_store();
        store
            .save(&merge(&[], &CardScanner::new(vec![card("Suya", 2000.0, "1")]).scan()))
            .unwrap();
        let mut page = CheckoutPage::new(store, "₦", None, None);

        assert_eq!(page.submit(), SubmitOutcome::Accepted);
        assert_eq!(page.render(), Order::empty());
        assert_eq!(page.submit(), SubmitOutcome::Rejected);
    }

    #[test]
    fn test_nav_toggle() {
        let mut nav = NavToggle::new();
        assert_eq!(nav.icon(), '☰');

        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.icon(), '✕');

        nav.click_outside();
        assert!(!nav.is_open());
        assert_eq!(nav.icon(), '☰');
    }
}
