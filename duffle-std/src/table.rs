//! HashMap-backed handler table.

use duffle_core::{DynHandler, RouteKey};
use std::{collections::HashMap, sync::Arc};

/// The composite-key → handler map a collector produces.
///
/// Immutable once built; lookups are O(1) expected.
#[derive(Clone, Default)]
pub struct HandlerTable {
    map: HashMap<RouteKey, Arc<dyn DynHandler>>,
}

impl HandlerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Look up the handler stored under `key`.
    pub fn route(&self, key: &RouteKey) -> Option<&Arc<dyn DynHandler>> {
        self.map.get(key)
    }

    /// Check if a handler is stored under `key`.
    pub fn contains(&self, key: &RouteKey) -> bool {
        self.map.contains_key(key)
    }

    /// Look up the handler stored under a raw composite key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn DynHandler>> {
        self.map.get(key)
    }

    /// Iterate over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.map.keys()
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl std::fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.map.keys().map(RouteKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("HandlerTable").field("routes", &keys).finish()
    }
}

/// Builder for `HandlerTable`.
///
/// Insertion never fails: a second handler under an existing key replaces
/// the first and the replaced handler is handed back to the caller.
#[derive(Default)]
pub struct HandlerTableBuilder {
    map: HashMap<RouteKey, Arc<dyn DynHandler>>,
}

impl HandlerTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handler under its own composite key.
    ///
    /// Returns the handler previously stored under that key, if any.
    pub fn insert(&mut self, handler: Arc<dyn DynHandler>) -> Option<Arc<dyn DynHandler>> {
        let key = RouteKey::of(handler.as_ref());
        self.map.insert(key, handler)
    }

    /// Build the table, consuming the builder.
    pub fn build(self) -> HandlerTable {
        HandlerTable { map: self.map }
    }
}
