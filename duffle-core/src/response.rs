//! Handler responses.

use crate::body::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification carried by every [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The request was handled.
    Success,
    /// The request could not be handled.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("SUCCESS"),
            Status::Error => f.write_str("ERROR"),
        }
    }
}

/// The value a handler produces for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    status: Status,
    body: Option<Body>,
}

impl Response {
    /// A `SUCCESS` response carrying `body`.
    pub fn success(body: impl Into<Body>) -> Self {
        Self {
            status: Status::Success,
            body: Some(body.into()),
        }
    }

    /// An `ERROR` response carrying `body`.
    pub fn error(body: impl Into<Body>) -> Self {
        Self {
            status: Status::Error,
            body: Some(body.into()),
        }
    }

    /// A response with no body.
    pub fn empty(status: Status) -> Self {
        Self { status, body: None }
    }

    /// The response status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The response body, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Take the body out of the response.
    pub fn into_body(self) -> Option<Body> {
        self.body
    }

    /// Returns true if the status is `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
