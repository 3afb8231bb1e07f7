//! Responder registry.
//!
//! This module provides `ResponderRegistry`, the mapping from [`RequestSignature`] to the
//! [`Responder`] that answers it. Registrations are exact-match only and persist until
//! [`ResponderRegistry::clear`] is called explicitly.

use crate::error::{Error, Result};
use crate::mocks::signature::RequestSignature;
use crate::types::request::Request;
use crate::types::response::Response;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Handler producing a canned response (or failure) for an intercepted request.
///
/// Implemented for every `Fn(&Request) -> Result<Response>` closure, so most callers never
/// implement it by hand. Custom implementations are registered with
/// [`ResponderRegistry::register_arc`].
pub trait Responder: Send + Sync {
    fn respond(&self, request: &Request) -> Result<Response>;
}

impl<F> Responder for F
where
    F: Fn(&Request) -> Result<Response> + Send + Sync,
{
    fn respond(&self, request: &Request) -> Result<Response> {
        self(request)
    }
}

static GLOBAL_REGISTRY: Lazy<Arc<ResponderRegistry>> =
    Lazy::new(|| Arc::new(ResponderRegistry::new()));

/// Mapping from request signature to responder.
///
/// At most one responder per signature: registering again for the same method and URL
/// replaces the previous responder.
#[derive(Default)]
pub struct ResponderRegistry {
    responders: RwLock<HashMap<RequestSignature, Arc<dyn Responder>>>,
}

impl ResponderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by [`crate::register_responder`] and the default controller.
    pub fn global() -> Arc<ResponderRegistry> {
        Arc::clone(&*GLOBAL_REGISTRY)
    }

    /// Register `responder` for `method` and `url`, replacing any earlier registration.
    ///
    /// Both strings are used verbatim; nothing is validated or normalized.
    pub fn register<F>(&self, method: &str, url: &str, responder: F)
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        self.register_arc(method, url, Arc::new(responder));
    }

    /// Register an already shared responder.
    pub fn register_arc(&self, method: &str, url: &str, responder: Arc<dyn Responder>) {
        let signature = RequestSignature::new(method, url);
        debug!("Registering responder for {}", signature);
        self.responders.write().insert(signature, responder);
    }

    /// Look up the responder registered for exactly `method` and `url`.
    pub fn resolve(&self, method: &str, url: &str) -> Result<Arc<dyn Responder>> {
        self.resolve_signature(&RequestSignature::new(method, url))
    }

    /// Look up the responder registered for `signature`.
    pub fn resolve_signature(&self, signature: &RequestSignature) -> Result<Arc<dyn Responder>> {
        self.responders
            .read()
            .get(signature)
            .cloned()
            .ok_or_else(|| Error::NoResponderFound {
                method: signature.method().to_string(),
                url: signature.url().to_string(),
            })
    }

    /// Whether a responder is registered for exactly `method` and `url`
    pub fn contains(&self, method: &str, url: &str) -> bool {
        self.responders
            .read()
            .contains_key(&RequestSignature::new(method, url))
    }

    /// Number of registered signatures
    pub fn len(&self) -> usize {
        self.responders.read().len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.responders.read().is_empty()
    }

    /// Remove every registration.
    ///
    /// Activation and deactivation never call this; tests that share a registry and need
    /// isolation call it themselves.
    pub fn clear(&self) {
        let mut responders = self.responders.write();
        debug!("Clearing {} registered responders", responders.len());
        responders.clear();
    }
}

impl fmt::Debug for ResponderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let responders = self.responders.read();
        f.debug_struct("ResponderRegistry")
            .field("signatures", &responders.keys().collect::<Vec<_>>())
            .finish()
    }
}
