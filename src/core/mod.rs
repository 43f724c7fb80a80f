pub mod backend;
pub mod config;
pub mod constants;
pub mod languages;
pub mod prompt;
pub mod scheduler;
pub mod session;
