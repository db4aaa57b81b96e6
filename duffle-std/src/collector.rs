//! # Aggregation Stage (Collector)
//!
//! Flattens the handler lists of many registrators into one
//! [`HandlerTable`] keyed by `"<method>:<endpoint>"`.
//!
//! # Ordering
//!
//! Registrators are walked in the order they were given, and each
//! registrator's handlers in their own order. When two handlers share a key
//! the one walked last is kept. [`DuplicatePolicy::Reject`] turns such a
//! collision into a construction error instead.

use crate::table::{HandlerTable, HandlerTableBuilder};
use duffle_core::{CollectError, Registrator, RouteKey};
use std::{collections::HashMap, sync::Arc};

/// What to do when two handlers are bound to the same composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the handler registered last.
    #[default]
    Override,
    /// Refuse to build the collector.
    Reject,
}

/// Aggregates registrators into a single lookup table.
///
/// Registrators are held by shared reference and never copied or modified.
#[derive(Clone)]
pub struct Collector {
    registrators: Vec<Arc<dyn Registrator>>,
}

impl Collector {
    /// Create a collector over `registrators`, in order.
    ///
    /// Duplicate keys are allowed; see [`Collector::handlers`].
    pub fn new(registrators: Vec<Arc<dyn Registrator>>) -> Self {
        Self { registrators }
    }

    /// Start building a collector.
    pub fn builder() -> CollectorBuilder {
        CollectorBuilder::new()
    }

    /// The registrators, in order.
    pub fn registrators(&self) -> &[Arc<dyn Registrator>] {
        &self.registrators
    }

    /// Number of registrators.
    pub fn len(&self) -> usize {
        self.registrators.len()
    }

    /// Check if there are no registrators.
    pub fn is_empty(&self) -> bool {
        self.registrators.is_empty()
    }

    /// Build the composite-key → handler table.
    ///
    /// Always succeeds. Later registrators, and later handlers within a
    /// registrator, override earlier ones on key collision.
    pub fn handlers(&self) -> HandlerTable {
        let mut builder = HandlerTableBuilder::new();

        for registrator in &self.registrators {
            for handler in registrator.endpoints() {
                let previous = builder.insert(Arc::clone(handler));

                #[cfg(feature = "tracing")]
                {
                    let key = RouteKey::of(handler.as_ref());
                    tracing::debug!(%key, registrator = registrator.name(), "Registered handler");
                    if previous.is_some() {
                        tracing::warn!(
                            %key,
                            registrator = registrator.name(),
                            "Handler overrides an earlier registration"
                        );
                    }
                }
                #[cfg(not(feature = "tracing"))]
                {
                    let _ = previous;
                }
            }
        }

        let table = builder.build();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(routes = table.len(), "Built handler table");
        }

        table
    }
}

impl std::fmt::Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.registrators.iter().map(|r| r.name()))
            .finish()
    }
}

/// Builder for constructing a [`Collector`].
#[derive(Default)]
pub struct CollectorBuilder {
    registrators: Vec<Arc<dyn Registrator>>,
    duplicates: DuplicatePolicy,
}

impl CollectorBuilder {
    /// Create a new empty builder with [`DuplicatePolicy::Override`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registrator.
    pub fn register<R: Registrator>(mut self, registrator: R) -> Self {
        self.registrators.push(Arc::new(registrator));
        self
    }

    /// Append a registrator that is shared with other owners.
    pub fn register_shared(mut self, registrator: Arc<dyn Registrator>) -> Self {
        self.registrators.push(registrator);
        self
    }

    /// Append several shared registrators, in order.
    pub fn register_all<I>(mut self, registrators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Registrator>>,
    {
        self.registrators.extend(registrators);
        self
    }

    /// Set how key collisions are treated.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Build the collector.
    ///
    /// Fails only under [`DuplicatePolicy::Reject`], with the first colliding
    /// key found in registration order.
    pub fn build(self) -> Result<Collector, CollectError> {
        if self.duplicates == DuplicatePolicy::Reject {
            check_unique(&self.registrators)?;
        }
        Ok(Collector::new(self.registrators))
    }
}

fn check_unique(registrators: &[Arc<dyn Registrator>]) -> Result<(), CollectError> {
    let mut seen: HashMap<RouteKey, &str> = HashMap::new();

    for registrator in registrators {
        for handler in registrator.endpoints() {
            let key = RouteKey::of(handler.as_ref());
            if let Some(first) = seen.get(&key) {
                return Err(CollectError::DuplicateKey {
                    key: key.into(),
                    first: first.to_string(),
                    second: registrator.name().to_string(),
                });
            }
            seen.insert(key, registrator.name());
        }
    }

    Ok(())
}
