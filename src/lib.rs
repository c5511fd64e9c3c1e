//! # Ultra-Kitchen session cart
//!
//! Cart engine behind the Ultra-Kitchen ordering pages. One script's worth of
//! behavior: quantity inputs on the menu pages build a cart, the cart rides
//! session storage across page loads, and the checkout page renders and
//! submits it.
//!
//!
//!
//! # Flow
//!
//! - Menu page load and every quantity input: scan page → merge with stored
//!   order → persist → render live summary
//! - Checkout page load: stored order → render only, no scan and no merge
//! - Submit: empty order rejected with no state change, otherwise acknowledge
//!   and drop the stored record
//!
//!
//!
//! # Notes
//!
//! ## Why merge instead of overwrite
//!
//! The page only knows about the items it displays. Overwriting the stored
//! order with a page scan would silently drop whatever was picked on other
//! menu pages during the same session. The merge keeps unmentioned items and
//! treats a zero quantity as an explicit removal, so ordering across several
//! pages works with a single stored record.
//!
//! ## Storage
//!
//! One session-scoped key holding `{items, total}` as JSON. The schema is
//! frozen; corrupt or missing state collapses to the empty order and never
//! breaks rendering.

pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod pages;
pub mod render;
pub mod reveal;
pub mod scanner;
pub mod store;
