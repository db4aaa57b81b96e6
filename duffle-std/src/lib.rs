//! # duffle-std
//!
//! Standard implementations for the Duffle request dispatcher.
//!
//! This crate provides:
//! - **Aggregation**: [`Collector`], [`CollectorBuilder`], [`DuplicatePolicy`]
//! - **Lookup table**: [`HandlerTable`], [`HandlerTableBuilder`]
//! - **Resolution**: [`Resolver`]
//! - **Closure handlers**: [`FnHandler`], [`handler_fn`]
//! - **Testing utilities**: [`testing`]
//!
//! # Logging
//!
//! With the `tracing` feature enabled, table construction and request
//! lookups emit `tracing` events. No subscriber is installed here.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use duffle_core;

// Modules
pub mod collector;
pub mod func;
pub mod resolver;
pub mod table;
pub mod testing;

pub use collector::{Collector, CollectorBuilder, DuplicatePolicy};
pub use func::{FnHandler, handler_fn};
pub use resolver::Resolver;
pub use table::{HandlerTable, HandlerTableBuilder};
