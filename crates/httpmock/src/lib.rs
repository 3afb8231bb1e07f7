//! Test-time interception of outbound HTTP requests.
//!
//! Requests issued through a [`Client`] go through its [`Transport`]. While interception is
//! active the transport of the shared [`default_client`] is replaced by a stub that looks
//! requests up in a [`ResponderRegistry`] by exact `(method, url)` and hands them to the
//! registered [`Responder`] instead of the network.
//!
//! ```ignore
//! let _guard = httpmock::InterceptionGuard::acquire();
//!
//! httpmock::register_responder("GET", "http://example.com/", |_: &httpmock::Request| {
//!     Ok(httpmock::Response::ok("xin chao"))
//! });
//!
//! let response = httpmock::default_client().get("http://example.com/")?;
//! assert_eq!(response.text(), "xin chao");
//! ```

pub mod config;
pub mod error;
pub mod mocks;
pub mod transport;
pub mod types;

pub use error::{Error, Result};
pub use mocks::controller::{activate, deactivate, register_responder, InterceptionController};
pub use mocks::guard::InterceptionGuard;
pub use mocks::registry::{Responder, ResponderRegistry};
pub use mocks::signature::RequestSignature;
pub use transport::client::{default_client, Client};
pub use transport::http::HttpTransport;
pub use transport::stub::StubTransport;
pub use transport::Transport;
pub use types::request::Request;
pub use types::response::Response;
