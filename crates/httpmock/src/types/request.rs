//! Outbound request.

use bytes::Bytes;
use std::collections::HashMap;

/// Outbound HTTP request as seen by a transport.
///
/// `method` and `url` are kept exactly as the caller wrote them; they form the
/// [`RequestSignature`](crate::RequestSignature) used for responder lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method token, e.g. `GET`
    pub method: String,
    /// Fully resolved target URL
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: Option<Bytes>,
}

impl Request {
    /// Create a request without headers or body
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}
