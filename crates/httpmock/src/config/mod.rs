//! Fixture files declaring static responders.
//!
//! Fixtures are read from YAML, JSON or JSONC files, selected by extension, and turned into
//! responders registered in a [`ResponderRegistry`](crate::ResponderRegistry).

pub mod error;
pub mod fixture;
pub mod parser;

pub use error::ConfigError;
pub use fixture::{load_fixtures, register_fixtures, Fixture, FixtureResponder};
