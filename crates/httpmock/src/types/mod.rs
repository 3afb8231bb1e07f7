//! Request and response values passed between clients, transports and responders.

pub mod request;
pub mod response;
