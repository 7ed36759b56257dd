//! Core module - server configuration, state and errors
//!
//! - [`Config`] - service configuration
//! - [`ServerState`] - shared request-handler state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - fatal startup/serve errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
