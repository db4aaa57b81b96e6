//! Closure-backed handlers.

use duffle_core::{BoxError, Handler, Method, Request, Response};
use std::future::Future;

/// A [`Handler`] built from an async closure and an explicit binding.
///
/// The closure receives its own copy of the request, so the returned future
/// does not borrow from the caller.
pub struct FnHandler<F> {
    method: Method,
    endpoint: String,
    f: F,
}

impl<F> FnHandler<F> {
    /// Bind `f` to `method` and `endpoint`.
    pub fn new(method: Method, endpoint: impl Into<String>, f: F) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            f,
        }
    }
}

/// Shorthand for [`FnHandler::new`].
///
/// # Example
///
/// ```rust,ignore
/// let ping = handler_fn(Method::Get, "/ping", |_req| async {
///     Ok::<_, BoxError>(Response::success("pong"))
/// });
/// ```
pub fn handler_fn<F, Fut>(method: Method, endpoint: impl Into<String>, f: F) -> FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send,
{
    FnHandler::new(method, endpoint, f)
}

impl<F, Fut> Handler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send,
{
    fn method(&self) -> Method {
        self.method
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn handle(&self, request: &Request) -> impl Future<Output = Result<Response, BoxError>> + Send {
        (self.f)(request.clone())
    }
}
