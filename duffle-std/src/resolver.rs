//! # Resolution Stage (Resolver)
//!
//! The single entry point that turns a [`Request`] into a [`Response`].
//!
//! A resolver takes a snapshot of a collector's table when it is built and
//! never looks at the collector again. The snapshot is immutable, so one
//! resolver can be shared between tasks without locking.

use crate::{collector::Collector, table::HandlerTable};
use duffle_core::{Method, Request, ResolveError, Response, RouteKey};

/// Dispatches requests to the handler registered for their method and url.
///
/// # Example
///
/// ```rust,ignore
/// let collector = Collector::builder()
///     .register(UserInfoRegistrator::new(repo))
///     .build()?;
/// let resolver = Resolver::new(&collector);
///
/// match resolver.resolve(&request).await {
///     Ok(response) => { /* handled */ }
///     Err(ResolveError::NotFound { .. }) => { /* nothing registered */ }
///     Err(ResolveError::Handler(err)) => { /* the handler failed */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    table: HandlerTable,
}

impl Resolver {
    /// Snapshot `collector`'s handler table.
    pub fn new(collector: &Collector) -> Self {
        Self {
            table: collector.handlers(),
        }
    }

    /// Resolve a request.
    ///
    /// The lookup key is `"<method>:<url>"`, compared verbatim. When nothing
    /// is registered under it this fails with [`ResolveError::NotFound`].
    /// Otherwise the handler's result is returned as is, with a handler
    /// failure surfacing as [`ResolveError::Handler`].
    pub async fn resolve(&self, request: &Request) -> Result<Response, ResolveError> {
        let key = RouteKey::for_request(request);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(method = %request.method(), url = request.url(), "Resolving request");
        }

        let Some(handler) = self.table.route(&key) else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(%key, "No handler found");
            }
            return Err(ResolveError::NotFound {
                method: request.method(),
                url: request.url().to_string(),
            });
        };

        handler
            .handle_dyn(request)
            .await
            .map_err(ResolveError::Handler)
    }

    /// Check whether a handler is registered for `method` and `url`.
    pub fn contains(&self, method: Method, url: &str) -> bool {
        self.table.contains(&RouteKey::new(method, url))
    }

    /// The registered composite keys, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteKey> {
        self.table.keys()
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<HandlerTable> for Resolver {
    fn from(table: HandlerTable) -> Self {
        Self { table }
    }
}

impl From<&Collector> for Resolver {
    fn from(collector: &Collector) -> Self {
        Self::new(collector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingHandler, FailingHandler, HandlerFailure, RecordingHandler};
    use duffle_core::{Body, HandlerSet, Status};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_resolves_registered_handler() {
        let recorder = RecordingHandler::new(Method::Post, "/api/items", Response::success("ok"));
        let collector = Collector::builder()
            .register(HandlerSet::new().with(recorder.clone()))
            .build()
            .unwrap();
        let resolver = Resolver::new(&collector);

        let request = Request::new(Method::Post, "/api/items").with_body("payload");
        let response = resolver.resolve(&request).await.unwrap();

        assert_eq!(response, Response::success("ok"));
        assert_eq!(recorder.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let resolver = Resolver::new(&Collector::new(Vec::new()));
        assert!(resolver.is_empty());

        let err = resolver
            .resolve(&Request::new(Method::Get, "/missing"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        let response = err.to_response();
        assert_eq!(response.status(), Status::Error);
        assert_eq!(
            response.body(),
            Some(&Body::from(
                "No handler found for endpoint: \"/missing\" and method: \"GET\""
            ))
        );
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let collector = Collector::builder()
            .register(HandlerSet::new().with(CountingHandler::new(Method::Get, "/users")))
            .build()
            .unwrap();
        let resolver = Resolver::new(&collector);

        assert!(resolver.contains(Method::Get, "/users"));
        for url in ["/users/", "/Users", "users", "/users?x=1"] {
            let err = resolver
                .resolve(&Request::new(Method::Get, url))
                .await
                .unwrap_err();
            assert!(err.is_not_found(), "{url} should not match");
        }
        let err = resolver
            .resolve(&Request::new(Method::Head, "/users"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_handler_failure_passes_through() {
        let collector = Collector::builder()
            .register(HandlerSet::new().with(FailingHandler::new(
                Method::Delete,
                "/api/items",
                "store unavailable",
            )))
            .build()
            .unwrap();
        let resolver = Resolver::new(&collector);

        let err = resolver
            .resolve(&Request::new(Method::Delete, "/api/items"))
            .await
            .unwrap_err();

        assert!(!err.is_not_found());
        let inner = err.into_handler_error().unwrap();
        let failure = inner.downcast_ref::<HandlerFailure>().unwrap();
        assert_eq!(failure.0, "store unavailable");
    }

    #[tokio::test]
    async fn test_repeated_resolution_hits_same_handler() {
        let counter = CountingHandler::new(Method::Get, "/ping");
        let collector = Collector::builder()
            .register(HandlerSet::new().with(counter.clone()))
            .build()
            .unwrap();
        let resolver = Resolver::new(&collector);

        let request = Request::new(Method::Get, "/ping");
        resolver.resolve(&request).await.unwrap();
        resolver.resolve(&request).await.unwrap();

        assert_eq!(counter.count(), 2);
    }

    #[tokio::test]
    async fn test_resolver_outlives_collector() {
        let shared: Arc<dyn duffle_core::Registrator> =
            Arc::new(HandlerSet::new().with(CountingHandler::new(Method::Get, "/a")));
        let first = Collector::new(vec![Arc::clone(&shared)]);
        let resolver = Resolver::from(&first);
        drop(first);

        assert_eq!(resolver.len(), 1);
        assert!(resolver.resolve(&Request::new(Method::Get, "/a")).await.is_ok());
        let routes: Vec<_> = resolver.routes().map(|k| k.to_string()).collect();
        assert_eq!(routes, vec!["GET:/a"]);
    }

    #[tokio::test]
    async fn test_shared_resolver_across_tasks() {
        let counter = CountingHandler::new(Method::Get, "/shared");
        let collector = Collector::builder()
            .register(HandlerSet::new().with(counter.clone()))
            .build()
            .unwrap();
        let resolver = Arc::new(Resolver::new(&collector));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move {
                    resolver
                        .resolve(&Request::new(Method::Get, "/shared"))
                        .await
                        .map(|r| r.is_success())
                })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap().unwrap());
        }
        assert_eq!(counter.count(), 4);
    }
}
