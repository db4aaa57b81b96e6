//! Feature-area groupings of handlers.

use crate::handler::{DynHandler, Handler};
use std::sync::Arc;

/// An ordered, append-only list of handlers.
///
/// Built once while a registrator is constructed and read-only afterwards:
/// there is no way to remove or reorder entries.
#[derive(Clone, Default)]
pub struct HandlerSet {
    handlers: Vec<Arc<dyn DynHandler>>,
}

impl HandlerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler, builder style.
    pub fn with<H: Handler>(mut self, handler: H) -> Self {
        self.push(handler);
        self
    }

    /// Append a handler.
    pub fn push<H: Handler>(&mut self, handler: H) {
        self.handlers.push(Arc::new(handler));
    }

    /// Append an already type-erased handler.
    pub fn push_dyn(&mut self, handler: Arc<dyn DynHandler>) {
        self.handlers.push(handler);
    }

    /// Number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate handlers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DynHandler>> {
        self.handlers.iter()
    }

    /// The handlers as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Arc<dyn DynHandler>] {
        &self.handlers
    }
}

impl std::fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.handlers
                    .iter()
                    .map(|h| format!("{}:{}", h.method_dyn(), h.endpoint_dyn())),
            )
            .finish()
    }
}

/// A collection of related handlers, typically everything one feature area
/// exposes.
///
/// # Example
///
/// ```rust,ignore
/// struct UserInfoRegistrator {
///     handlers: HandlerSet,
/// }
///
/// impl UserInfoRegistrator {
///     fn new(repo: Arc<UserRepository>) -> Self {
///         Self {
///             handlers: HandlerSet::new()
///                 .with(CreateUserInfo::new(repo.clone()))
///                 .with(ListUserInfo::new(repo)),
///         }
///     }
/// }
///
/// impl Registrator for UserInfoRegistrator {
///     fn endpoints(&self) -> &[Arc<dyn DynHandler>] {
///         self.handlers.as_slice()
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a handler registrator",
    label = "missing `Registrator` implementation",
    note = "Registrators must implement `endpoints` to expose their handlers."
)]
pub trait Registrator: Send + Sync + 'static {
    /// Every handler of this registrator, in registration order.
    fn endpoints(&self) -> &[Arc<dyn DynHandler>];

    /// Name used in logs and duplicate-key errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl Registrator for HandlerSet {
    fn endpoints(&self) -> &[Arc<dyn DynHandler>] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::BoxError, method::Method, request::Request, response::Response};

    struct Fixed(Method, &'static str);

    impl Handler for Fixed {
        fn method(&self) -> Method {
            self.0
        }

        fn endpoint(&self) -> &str {
            self.1
        }

        async fn handle(&self, _request: &Request) -> Result<Response, BoxError> {
            Ok(Response::success(self.1))
        }
    }

    #[test]
    fn test_handler_set_keeps_insertion_order() {
        let set = HandlerSet::new()
            .with(Fixed(Method::Post, "/b"))
            .with(Fixed(Method::Get, "/a"))
            .with(Fixed(Method::Get, "/c"));

        let endpoints: Vec<_> = set.endpoints().iter().map(|h| h.endpoint_dyn()).collect();
        assert_eq!(endpoints, vec!["/b", "/a", "/c"]);
        assert_eq!(set.len(), 3);
        assert_eq!(format!("{:?}", set), r#"["POST:/b", "GET:/a", "GET:/c"]"#);
    }

    #[test]
    fn test_default_name_is_type_name() {
        let set = HandlerSet::new();
        assert!(set.is_empty());
        assert!(set.name().ends_with("HandlerSet"));
    }
}
