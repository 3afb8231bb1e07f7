//! Pluggable round-trip layer underneath [`Client`](crate::Client).
//!
//! - [`http::HttpTransport`]: performs real network I/O
//! - [`stub::StubTransport`]: never touches the network, answers from a responder registry
//! - [`client::Client`]: holds the currently installed transport and lets it be swapped

pub mod client;
pub mod http;
pub mod stub;

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;

/// Fulfils a single request.
pub trait Transport: Send + Sync {
    fn round_trip(&self, request: &Request) -> Result<Response>;
}
