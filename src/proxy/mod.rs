//! The server half: fills in payload defaults, attaches the upstream
//! credential, and relays the upstream answer.

pub mod defaults;
pub mod error;
pub mod forwarder;
pub mod server;
pub mod settings;

pub use forwarder::Forwarder;
