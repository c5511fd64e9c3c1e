//! # Session storage
//!
//! Key/value store scoped to one browsing session.
//!
//! Core purpose is to carry the last order across page loads. One fixed key,
//! one JSON record, full-record replace on every write.
//!
//! ## Requirements
//!
//! - Single key, value is `{items: [...], total: n}`
//! - Schema is frozen, no versioning or migration
//! - Corrupt or missing state must never break page rendering
//!
//! ## Implementation
//!
//! - `SessionStore` is the storage seam: pages only see string get/set/remove,
//!   so tests run against an in-memory map
//! - `OrderStore` owns the key and the fail-soft decode policy: any failure on
//!   read collapses to the empty order, logged and never surfaced
use std::collections::HashMap;

use tracing::warn;

use crate::{error::StoreError, model::Order};

/// String key/value store living for the current session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory session backend.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);

        Ok(())
    }
}

/// Reads and writes the persisted order record under one fixed key.
pub struct OrderStore<S: SessionStore> {
    key: String,
    session: S,
}

impl<S: SessionStore> OrderStore<S> {
    pub fn new(key: impl Into<String>, session: S) -> Self {
        Self {
            key: key.into(),
            session,
        }
    }

    /// Loads the stored order. Missing key, backend failure, or an
    /// unparseable record all yield the empty order.
    pub fn load(&self) -> Order {
        let raw = match self.session.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Order::empty(),
            Err(e) => {
                warn!("Session read failed: {e}");
                return Order::empty();
            }
        };

        decode(&raw).unwrap_or_else(|e| {
            warn!("Stored order unreadable: {e}");
            Order::empty()
        })
    }

    /// Serializes and writes the full order, replacing any prior value.
    pub fn save(&mut self, order: &Order) -> Result<(), StoreError> {
        let raw = serde_json::to_string(order)?;

        self.session.set(&self.key, raw)
    }

    /// Removes the persisted record entirely.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.session.remove(&self.key)
    }

    /// Hands the session back, for the next page in the same browsing
    /// session.
    pub fn into_session(self) -> S {
        self.session
    }
}

fn decode(raw: &str) -> Result<Order, StoreError> {
    serde_json::from_str(raw).map_err(|_| StoreError::MalformedRecord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn store() -> OrderStore<MemorySession> {
        OrderStore::new("ultrakitchen_last_order", MemorySession::new())
    }

    #[test]
    fn test_load_missing_key() {
        let store = store();

        assert_eq!(store.load(), Order::empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = store();
        let order = Order {
            items: vec![Item::new("Jollof Rice", 1500.0, 2)],
            total: 3000.0,
        };

        store.save(&order).unwrap();

        assert_eq!(store.load(), order);
    }

    #[test]
    fn test_corrupt_record_recovers_empty() {
        let mut session = MemorySession::new();
        session
            .set("ultrakitchen_last_order", "{not json".to_string())
            .unwrap();
        let store = OrderStore::new("ultrakitchen_last_order", session);

        assert_eq!(store.load(), Order::empty());
    }

    #[test]
    fn test_record_without_items_recovers_empty() {
        let mut session = MemorySession::new();
        session
            .set("ultrakitchen_last_order", r#"{"total": 12}"#.to_string())
            .unwrap();
        let store = OrderStore::new("ultrakitchen_last_order", session);

        assert_eq!(store.load(), Order::empty());
    }

    #[test]
    fn test_load_after_clear() {
        let mut store = store();
        store
            .save(&Order {
                items: vec![Item::new("Soup", 500.0, 1)],
                total: 500.0,
            })
            .unwrap();

        store.clear().unwrap();

        assert_eq!(store.load(), Order::empty());
    }
}
