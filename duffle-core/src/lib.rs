//! # duffle-core
//!
//! Core traits and data model for the Duffle request dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by feature
//! crates that only need to declare handlers, without pulling in the
//! collector and resolver from `duffle-std`.
//!
//! # Three-Stage Pipeline
//!
//! ## Stage 1: Registration ([`Handler`], [`Registrator`])
//!
//! A [`Handler`] is bound to exactly one (method, endpoint) pair and holds the
//! business logic for it. A [`Registrator`] groups the handlers of one feature
//! area in a fixed, ordered [`HandlerSet`].
//!
//! ## Stage 2: Aggregation (`Collector`)
//!
//! Lives in `duffle-std`. Flattens many registrators into one table keyed by
//! [`RouteKey`].
//!
//! ## Stage 3: Resolution (`Resolver`)
//!
//! Lives in `duffle-std`. Looks a [`Request`] up in the table and invokes the
//! matching handler.
//!
//! # Error Types
//!
//! - [`ResolveError`] - Resolution failures (no handler, or the handler failed)
//! - [`CollectError`] - Table construction failures
//! - [`BodyError`] - Typed body conversion failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod body;
mod error;
mod handler;
mod key;
mod method;
mod registrator;
mod request;
mod response;

// Re-exports
pub use body::Body;
pub use error::{BodyError, BoxError, CollectError, ParseMethodError, ResolveError};
pub use handler::{DynHandler, Handler};
pub use key::RouteKey;
pub use method::Method;
pub use registrator::{HandlerSet, Registrator};
pub use request::Request;
pub use response::{Response, Status};
