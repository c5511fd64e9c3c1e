//! # Order merging
//!
//! Reconciles the previously stored cart with the quantities currently shown
//! on a menu page.
//!
//! Incoming items are current truth for whatever is on this page; items from
//! other pages are left untouched, which is what lets one session order across
//! several menu pages. A zero quantity is an explicit removal signal, not a
//! no-op: the name is dropped from the cart entirely.
use crate::model::{Item, Order};

/// Merges freshly scanned page items into the stored item list, matched by
/// name, and returns the next canonical order.
pub fn merge(existing: &[Item], incoming: &[Item]) -> Order {
    let mut merged: Vec<Item> = existing.to_vec();

    for new_item in incoming {
        if new_item.qty == 0 {
            // remove the name completely, whether or not it was present
            merged.retain(|i| i.name != new_item.name);
            continue;
        }

        match merged.iter_mut().find(|i| i.name == new_item.name) {
            Some(found) => {
                // price and name stay fixed from first insert
                found.qty = new_item.qty;
                found.subtotal = new_item.subtotal;
            }
            None => merged.push(new_item.clone()),
        }
    }

    // safety net against any path that left a zero-quantity item behind
    merged.retain(|i| i.qty > 0);

    let total = merged.iter().map(|i| i.subtotal).sum();

    Order {
        items: merged,
        total,
    }
}
