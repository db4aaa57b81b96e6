//! # Registration Stage (Handler)
//!
//! A handler is the unit of business logic bound to exactly one
//! (method, endpoint) pair.
//!
//! # Binding
//!
//! There is no default binding. A handler states its method and endpoint
//! itself, usually from fields set in its constructor, so an unbound handler
//! can never reach a resolver's table by accident.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl Handler for CreateUserInfo`
//! 2. **Closure**: `handler_fn(Method::Post, "/api/users", |req| async move { ... })`
//!    (see `duffle-std`)

use crate::{error::BoxError, method::Method, request::Request, response::Response};
use futures::future::BoxFuture;
use std::future::Future;

/// The business logic behind one endpoint.
///
/// # Failure
///
/// `handle` may fail with any error. The resolver hands that error back to
/// its caller untouched.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` style signatures for static dispatch.
/// Tables store handlers as [`DynHandler`] trait objects; every `Handler`
/// is a `DynHandler` through a blanket impl.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a request handler",
    label = "missing `Handler` implementation",
    note = "Handlers must implement `method`, `endpoint` and `handle`."
)]
pub trait Handler: Send + Sync + 'static {
    /// The method this handler answers.
    fn method(&self) -> Method;

    /// The endpoint path this handler answers.
    fn endpoint(&self) -> &str;

    /// Executes the handler logic.
    fn handle(&self, request: &Request)
    -> impl Future<Output = Result<Response, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Handler`].
///
/// Methods carry a `_dyn` suffix so they never clash with [`Handler`]'s when
/// both traits are in scope.
pub trait DynHandler: Send + Sync + 'static {
    /// The method this handler answers (dynamic dispatch version).
    fn method_dyn(&self) -> Method;

    /// The endpoint path this handler answers (dynamic dispatch version).
    fn endpoint_dyn(&self) -> &str;

    /// Executes the handler logic (dynamic dispatch version).
    fn handle_dyn<'a>(&'a self, request: &'a Request)
    -> BoxFuture<'a, Result<Response, BoxError>>;
}

// Blanket implementation: Any type implementing Handler implements DynHandler automatically.
impl<T: Handler> DynHandler for T {
    fn method_dyn(&self) -> Method {
        Handler::method(self)
    }

    fn endpoint_dyn(&self) -> &str {
        Handler::endpoint(self)
    }

    fn handle_dyn<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Response, BoxError>> {
        Box::pin(Handler::handle(self, request))
    }
}
