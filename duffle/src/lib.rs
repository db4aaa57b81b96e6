//! # duffle - In-Process Request Dispatch
//!
//! `duffle` resolves structured, already-parsed requests to the one handler
//! registered for their method and path, and invokes it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use duffle::prelude::*;
//!
//! // One handler per (method, endpoint)
//! struct Ping;
//! impl Handler for Ping { ... }
//!
//! // Group handlers, collect them, resolve requests
//! let collector = Collector::builder()
//!     .register(HandlerSet::new().with(Ping))
//!     .build()?;
//! let resolver = Resolver::new(&collector);
//!
//! let response = resolver.resolve(&Request::new(Method::Get, "/ping")).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use duffle_core::{
    // Payloads
    Body,
    BodyError,
    // Error types
    BoxError,
    CollectError,
    // Handler
    DynHandler,
    Handler,
    HandlerSet,
    // Data model
    Method,
    ParseMethodError,
    Registrator,
    Request,
    ResolveError,
    Response,
    // Routing
    RouteKey,
    Status,
};

pub use duffle_std::{
    Collector, CollectorBuilder, DuplicatePolicy, FnHandler, HandlerTable, HandlerTableBuilder,
    Resolver, handler_fn,
};

/// Testing utilities.
pub mod testing {
    pub use duffle_std::testing::{
        CountingHandler, FailingHandler, HandlerFailure, RecordingHandler, UnboundHandler,
    };
}

/// Prelude module - common imports for Duffle.
///
/// # Usage
///
/// ```rust,ignore
/// use duffle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Body, BoxError, Collector, DynHandler, Handler, HandlerSet, Method, Registrator, Request,
        ResolveError, Resolver, Response, Status, handler_fn,
    };
}
