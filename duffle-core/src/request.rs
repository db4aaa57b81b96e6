//! Parsed, in-memory requests.

use crate::{body::Body, method::Method};
use serde::{Deserialize, Serialize};

/// A request as handed to the resolver.
///
/// Fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    method: Method,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
}

impl Request {
    /// Create a request without a body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Attach a body, consuming the request.
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The request url, exactly as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }
}
