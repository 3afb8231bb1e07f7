//! Response returned by a transport or a responder.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Cursor;

/// HTTP response handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers. One entry per name: the real transport joins repeated headers
    /// with `", "` and decodes non-UTF-8 values lossily.
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Empty response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// `200 OK` with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200).with_body(body)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Length of the body in bytes.
    pub fn content_length(&self) -> u64 {
        self.body.len() as u64
    }

    /// Readable stream over the body.
    pub fn body_reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.body.clone())
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body deserialized from JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
