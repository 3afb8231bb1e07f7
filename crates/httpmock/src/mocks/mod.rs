//! Responder registry and interception lifecycle.
//!
//! - [`registry::ResponderRegistry`]: maps request signatures to responders
//! - [`controller::InterceptionController`]: swaps a client's transport for the registry-backed stub
//! - [`guard::InterceptionGuard`]: keeps interception active for a scope

pub mod controller;
pub mod guard;
pub mod registry;
pub mod signature;
