//! Testing utilities for Duffle.
//!
//! This module provides handlers that make it easy to check what a resolver
//! dispatched, and how often.
//!
//! # Features
//!
//! - [`RecordingHandler`]: Records every request and answers with a canned response
//! - [`CountingHandler`]: Counts invocations
//! - [`FailingHandler`]: Always fails with a [`HandlerFailure`]
//! - [`UnboundHandler`]: A handler with the placeholder binding, for scaffolding

use duffle_core::{BoxError, Handler, Method, Request, Response, Status};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every request it receives.
///
/// Clones share the same record, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(Method::Post, "/items", Response::success("ok"));
/// let collector = Collector::builder()
///     .register(HandlerSet::new().with(recorder.clone()))
///     .build()?;
///
/// Resolver::new(&collector).resolve(&request).await?;
/// assert_eq!(recorder.requests(), vec![request]);
/// ```
#[derive(Clone)]
pub struct RecordingHandler {
    method: Method,
    endpoint: String,
    response: Response,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RecordingHandler {
    /// Create a recording handler answering with `response`.
    pub fn new(method: Method, endpoint: impl Into<String>, response: Response) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Handler for RecordingHandler {
    fn method(&self) -> Method {
        self.method
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn handle(&self, request: &Request) -> Result<Response, BoxError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        Ok(self.response.clone())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and answers with an empty `SUCCESS`.
#[derive(Clone)]
pub struct CountingHandler {
    method: Method,
    endpoint: String,
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Handler for CountingHandler {
    fn method(&self) -> Method {
        self.method
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn handle(&self, _request: &Request) -> Result<Response, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Response::empty(Status::Success))
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// The error every [`FailingHandler`] fails with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerFailure(pub String);

/// A handler that always fails.
#[derive(Clone)]
pub struct FailingHandler {
    method: Method,
    endpoint: String,
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(method: Method, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    fn method(&self) -> Method {
        self.method
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn handle(&self, _request: &Request) -> Result<Response, BoxError> {
        Err(Box::new(HandlerFailure(self.message.clone())))
    }
}

// ============================================================================
// Unbound Handler
// ============================================================================

/// A handler that was never given a real binding.
///
/// It answers `GET` on the literal endpoint `"endpoint unimplemented"` and
/// fails when called. Useful for scaffolding a registrator before its
/// handlers exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnboundHandler;

impl UnboundHandler {
    /// The placeholder endpoint.
    pub const ENDPOINT: &'static str = "endpoint unimplemented";
}

impl Handler for UnboundHandler {
    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> &str {
        Self::ENDPOINT
    }

    async fn handle(&self, _request: &Request) -> Result<Response, BoxError> {
        Err(Box::new(HandlerFailure(Self::ENDPOINT.to_string())))
    }
}
