//! The composite key handlers are stored and looked up under.

use crate::{handler::DynHandler, method::Method, request::Request};
use std::{borrow::Borrow, fmt};

/// The composite key `"<method>:<endpoint>"`.
///
/// Built the same way from a handler's binding and from a request, so a
/// lookup is a plain string comparison: no normalization, no case folding,
/// no trailing-slash handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(String);

impl RouteKey {
    /// Build a key from a method and a path.
    pub fn new(method: Method, path: &str) -> Self {
        Self(format!("{}:{}", method, path))
    }

    /// The key a handler is registered under.
    pub fn of(handler: &dyn DynHandler) -> Self {
        Self::new(handler.method_dyn(), handler.endpoint_dyn())
    }

    /// The key a request is looked up under.
    pub fn for_request(request: &Request) -> Self {
        Self::new(request.method(), request.url())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<RouteKey> for String {
    fn from(key: RouteKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_key_format() {
        let key = RouteKey::new(Method::Post, "/api/userinfo");
        assert_eq!(key.as_str(), "POST:/api/userinfo");
        assert_eq!(key.to_string(), "POST:/api/userinfo");
    }

    #[test]
    fn test_route_key_is_verbatim() {
        let request = Request::new(Method::Get, "/API/UserInfo/");
        assert_eq!(RouteKey::for_request(&request).as_str(), "GET:/API/UserInfo/");
        assert_ne!(
            RouteKey::new(Method::Get, "/a/"),
            RouteKey::new(Method::Get, "/a")
        );
    }
}
