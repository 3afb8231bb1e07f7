//! Controller swapping a client's transport for the registry-backed stub.
//!
//! This module provides `InterceptionController`, which saves the transport installed on a
//! [`Client`], installs a [`StubTransport`] in its place on activation and puts the saved
//! transport back on deactivation. The crate-level [`activate`], [`deactivate`] and
//! [`register_responder`] functions drive a process-wide controller bound to
//! [`default_client`] and [`ResponderRegistry::global`].

use crate::error::Result;
use crate::mocks::guard::InterceptionGuard;
use crate::mocks::registry::ResponderRegistry;
use crate::transport::client::{default_client, Client};
use crate::transport::stub::StubTransport;
use crate::transport::Transport;
use crate::types::request::Request;
use crate::types::response::Response;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

static GLOBAL_CONTROLLER: Lazy<InterceptionController> =
    Lazy::new(|| InterceptionController::new(default_client(), ResponderRegistry::global()));

/// Install the stub transport on the default client.
pub fn activate() {
    InterceptionController::global().activate();
}

/// Restore the real transport on the default client. Registrations are kept.
pub fn deactivate() {
    InterceptionController::global().deactivate();
}

/// Register a responder in the process-wide registry.
pub fn register_responder<F>(method: &str, url: &str, responder: F)
where
    F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
{
    InterceptionController::global().register_responder(method, url, responder);
}

/// Swaps a client between its real transport and a registry-backed stub.
///
/// Two states only: inactive (the client's own transport is installed) and active (the
/// stub is installed and the replaced transport is saved). Both transitions are idempotent
/// and can be repeated indefinitely.
///
/// Activation state belongs to the client, which is shared by every clone of it. Code that
/// runs concurrently against the same client must have a single owner at a time; acquire an
/// [`InterceptionGuard`] to get that ownership.
pub struct InterceptionController {
    client: Client,
    stub: Arc<StubTransport>,
    /// Transport replaced by the stub; `Some` while active
    saved: Mutex<Option<Arc<dyn Transport>>>,
    /// Held by the current guard owner
    pub(crate) owner: Mutex<()>,
}

impl InterceptionController {
    /// Create an inactive controller for `client`, answering from `registry`
    pub fn new(client: Client, registry: Arc<ResponderRegistry>) -> Self {
        Self {
            client,
            stub: Arc::new(StubTransport::new(registry)),
            saved: Mutex::new(None),
            owner: Mutex::new(()),
        }
    }

    /// Controller driving [`default_client`] with the process-wide registry.
    pub fn global() -> &'static InterceptionController {
        &GLOBAL_CONTROLLER
    }

    /// Client whose transport is swapped
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Registry backing the stub transport
    pub fn registry(&self) -> &Arc<ResponderRegistry> {
        self.stub.registry()
    }

    /// Whether the stub transport is currently installed
    pub fn is_active(&self) -> bool {
        self.saved.lock().is_some()
    }

    /// Install the stub transport, saving the transport it replaces.
    ///
    /// Activating again reinstalls the stub and keeps the transport saved first.
    pub fn activate(&self) {
        let mut saved = self.saved.lock();
        let previous = self.client.set_transport(self.stub.clone());
        if saved.is_none() {
            debug!("Activating request interception");
            *saved = Some(previous);
        }
    }

    /// Put back the transport saved by [`activate`](Self::activate).
    ///
    /// Does nothing when inactive. The registry is left untouched.
    pub fn deactivate(&self) {
        if let Some(real) = self.saved.lock().take() {
            debug!("Deactivating request interception");
            self.client.set_transport(real);
        }
    }

    /// Answer `request` from the registry without going through the client.
    pub fn dispatch(&self, request: &Request) -> Result<Response> {
        self.stub.dispatch(request)
    }

    /// Register a responder in this controller's registry
    pub fn register_responder<F>(&self, method: &str, url: &str, responder: F)
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        self.registry().register(method, url, responder);
    }

    /// Take ownership of this controller and activate it until the guard is dropped.
    pub fn guard(&self) -> InterceptionGuard<'_> {
        InterceptionGuard::new(self)
    }
}

impl fmt::Debug for InterceptionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptionController")
            .field("active", &self.is_active())
            .field("registry", self.registry())
            .finish()
    }
}
