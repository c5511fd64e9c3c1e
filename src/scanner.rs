//! # Page scanning
//!
//! Reads the current quantities and prices off a menu page into a transient
//! item list. This is a pure read of page state, the producer feeding the
//! merge; subtotals are always recomputed here, never taken from the page.
use regex::Regex;

use crate::model::Item;

/// Raw view of one orderable card as the page presents it: a display name,
/// a price carried as a data attribute or as visible text, and the raw value
/// of the quantity control.
#[derive(Debug, Clone)]
pub struct MenuCard {
    pub name: String,
    pub price_attr: Option<f64>,
    pub price_text: String,
    pub qty_value: String,
}

/// Source of the items currently visible on a page. The merge only ever sees
/// this interface, so it can be driven with synthetic inputs in tests.
pub trait PageScanner {
    fn scan(&self) -> Vec<Item>;
}

/// Scanner over a list of menu cards.
pub struct CardScanner {
    cards: Vec<MenuCard>,
}

impl CardScanner {
    pub fn new(cards: Vec<MenuCard>) -> Self {
        Self { cards }
    }

    /// Simulates typing into a card's quantity control.
    pub fn set_qty(&mut self, name: &str, value: &str) {
        for card in self.cards.iter_mut().filter(|c| c.name == name) {
            card.qty_value = value.to_string();
        }
    }
}

impl PageScanner for CardScanner {
    fn scan(&self) -> Vec<Item> {
        self.cards
            .iter()
            .filter(|card| !card.name.trim().is_empty())
            .map(|card| {
                let price = card
                    .price_attr
                    .unwrap_or_else(|| parse_price_text(&card.price_text));
                let qty = parse_qty(&card.qty_value);

                Item::new(card.name.trim(), price, qty)
            })
            .collect()
    }
}

/// Strips everything but digits from visible price text, 0 when nothing is
/// left.
fn parse_price_text(text: &str) -> f64 {
    let digits_only = Regex::new(r"[^\d]").unwrap();
    let stripped = digits_only.replace_all(text, "");

    stripped.parse().unwrap_or(0.0)
}

fn parse_qty(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}
