//! autotranslate translates text as it is typed, through a small proxy in
//! front of a chat-completion service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the translation session, the debounce scheduler that
//!   decides when a request is issued, prompt construction, and the backends
//!   requests are sent through.
//! - [`proxy`] is the server half: it fills payload defaults, attaches the
//!   upstream credential, relays the upstream answer, and serves it over HTTP.
//! - [`ui`] renders the terminal translator and runs its event loop.
//! - [`api`] defines the chat payloads shared by client and proxy.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod proxy;
pub mod ui;
pub mod utils;
