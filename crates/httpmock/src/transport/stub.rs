//! Registry-backed stub transport.

use crate::error::Result;
use crate::mocks::registry::ResponderRegistry;
use crate::mocks::signature::RequestSignature;
use crate::transport::Transport;
use crate::types::request::Request;
use crate::types::response::Response;
use std::sync::Arc;
use tracing::trace;

/// Transport that answers every request from a [`ResponderRegistry`] instead of the network.
#[derive(Debug, Clone)]
pub struct StubTransport {
    registry: Arc<ResponderRegistry>,
}

impl StubTransport {
    /// Create a stub answering from `registry`
    pub fn new(registry: Arc<ResponderRegistry>) -> Self {
        Self { registry }
    }

    /// Registry the stub resolves requests in
    pub fn registry(&self) -> &Arc<ResponderRegistry> {
        &self.registry
    }

    /// Resolve the responder for the request's signature and invoke it.
    ///
    /// The responder's result is returned as is, failures included. A request with no
    /// registered responder fails with [`Error::NoResponderFound`](crate::Error::NoResponderFound).
    pub fn dispatch(&self, request: &Request) -> Result<Response> {
        let signature = RequestSignature::from(request);
        // The registry lock is released before the responder runs.
        let responder = self.registry.resolve_signature(&signature)?;
        trace!("Dispatching {} to registered responder", signature);
        responder.respond(request)
    }
}

impl Transport for StubTransport {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        self.dispatch(request)
    }
}
