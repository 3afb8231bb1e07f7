//! Real network transport.

use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::request::Request;
use crate::types::response::Response;
use once_cell::sync::OnceCell;
use reqwest::blocking::Client as BlockingClient;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Transport performing actual HTTP I/O with a blocking `reqwest` client.
///
/// The inner client is built on first use, so constructing an `HttpTransport` never fails.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: OnceCell<BlockingClient>,
}

impl HttpTransport {
    /// Create a transport; the `reqwest` client is built on the first request
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&BlockingClient> {
        Ok(self
            .client
            .get_or_try_init(|| BlockingClient::builder().build())?)
    }
}

/// Flatten a header map: values are decoded lossily and repeated headers are joined
/// with `", "`.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        match collected.entry(name.as_str().to_string()) {
            Entry::Occupied(mut existing) => {
                let existing = existing.get_mut();
                existing.push_str(", ");
                existing.push_str(&value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value.into_owned());
            }
        }
    }
    collected
}

impl Transport for HttpTransport {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| Error::InvalidMethod(request.method.clone()))?;
        debug!("Sending {} {}", request.method, request.url);

        let mut builder = self.client()?.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes()?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
