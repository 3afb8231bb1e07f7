//! HTTP client with a swappable transport.

use crate::error::Result;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;
use crate::types::request::Request;
use crate::types::response::Response;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static DEFAULT_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Shared client used by code that has no client of its own.
///
/// Clones share one transport slot, so swapping the transport of the returned client swaps
/// it for every holder.
pub fn default_client() -> Client {
    DEFAULT_CLIENT.clone()
}

/// Issues requests through the currently installed [`Transport`].
#[derive(Clone)]
pub struct Client {
    transport: Arc<RwLock<Arc<dyn Transport>>>,
}

impl Client {
    /// Client backed by the real network.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    /// Client using `transport` until it is swapped
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Arc::new(RwLock::new(transport)),
        }
    }

    /// Currently installed transport.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&*self.transport.read())
    }

    /// Install `transport` and return the one it replaces.
    pub fn set_transport(&self, transport: Arc<dyn Transport>) -> Arc<dyn Transport> {
        std::mem::replace(&mut *self.transport.write(), transport)
    }

    /// Whether both clients share the same transport slot.
    pub fn shares_transport_with(&self, other: &Client) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport)
    }

    /// Send `request` through the installed transport.
    pub fn execute(&self, request: Request) -> Result<Response> {
        // Snapshot the transport so a swap during the round trip does not block on it.
        let transport = self.transport();
        transport.round_trip(&request)
    }

    /// Send a bodiless request with any method
    pub fn request(&self, method: &str, url: &str) -> Result<Response> {
        self.execute(Request::new(method, url))
    }

    /// Send a `GET` request
    pub fn get(&self, url: &str) -> Result<Response> {
        self.request("GET", url)
    }

    pub fn head(&self, url: &str) -> Result<Response> {
        self.request("HEAD", url)
    }

    pub fn delete(&self, url: &str) -> Result<Response> {
        self.request("DELETE", url)
    }

    /// Send a `POST` request with `body`
    pub fn post(&self, url: &str, body: impl Into<bytes::Bytes>) -> Result<Response> {
        self.execute(Request::new("POST", url).with_body(body))
    }

    pub fn put(&self, url: &str, body: impl Into<bytes::Bytes>) -> Result<Response> {
        self.execute(Request::new("PUT", url).with_body(body))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
