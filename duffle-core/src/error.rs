//! Error types for Duffle.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ResolveError`] - Errors returned by resolving a request
//! - [`CollectError`] - Errors while building a handler table
//! - [`BodyError`] - Errors converting a [`Body`](crate::Body) to or from a typed value
//! - [`ParseMethodError`] - Unknown method strings

use crate::{body::Body, method::Method, response::Response};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// This is what a handler fails with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving a request.
///
/// The two variants are the two failure channels of resolution: the resolver
/// found nothing to call, or it called a handler and that handler failed.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No handler is registered for the request's method and url.
    #[error("No handler found for endpoint: \"{url}\" and method: \"{method}\"")]
    NotFound {
        /// The requested method.
        method: Method,
        /// The requested url, verbatim.
        url: String,
    },

    /// The matched handler failed. The inner error is the handler's own and
    /// is reported as this error's `source()`.
    #[error("handler failed")]
    Handler(#[source] BoxError),
}

impl ResolveError {
    /// Returns true if no handler matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }

    /// The response-shaped form of this error.
    ///
    /// `NotFound` becomes `{ status: ERROR, body: "<message>" }`. Handler
    /// failures carry no shape guarantee, so they are rendered the same way
    /// from the handler error's `Display` output.
    pub fn to_response(&self) -> Response {
        let message = match self {
            ResolveError::NotFound { .. } => self.to_string(),
            ResolveError::Handler(err) => err.to_string(),
        };
        Response::error(Body::Text(message))
    }

    /// Recover the handler's error, if this was a handler failure.
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            ResolveError::Handler(err) => Some(err),
            ResolveError::NotFound { .. } => None,
        }
    }
}

impl From<ResolveError> for Response {
    fn from(err: ResolveError) -> Self {
        err.to_response()
    }
}

/// Errors that can occur while collecting handlers into a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// Two handlers were bound to the same composite key.
    #[error("duplicate handler for key {key}: registered by {first} and {second}")]
    DuplicateKey {
        /// The colliding composite key.
        key: String,
        /// Name of the registrator that registered the key first.
        first: String,
        /// Name of the registrator that registered it again.
        second: String,
    },
}

/// Errors converting between a [`Body`] and a typed value.
#[derive(Error, Debug)]
pub enum BodyError {
    /// The value could not be represented as structured data, or the body
    /// does not have the shape of the requested type.
    #[error("body conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// An unknown method string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown request method: {0:?}")]
pub struct ParseMethodError(pub String);
