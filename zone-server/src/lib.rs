//! Zone Store Service - geofencing zone CRUD over a JSON backing document
//!
//! # Architecture
//!
//! The service loads a collection of zones from a flat JSON document at
//! startup, serves read/write HTTP requests against the in-memory
//! collection, and mirrors the whole collection back to disk after every
//! successful mutation.
//!
//! # Module structure
//!
//! ```text
//! zone-server/src/
//! ├── core/          # Configuration, state, server, fatal errors
//! ├── api/           # HTTP routes and handlers
//! ├── store/         # In-memory zone collection + JSON file mirror
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use store::{StoreError, StoreOptions, ZoneStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once, before anything logs.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _____                   _____ _
|__  /___  _ __   ___   / ____| |_ ___  _ __ ___
  / // _ \| '_ \ / _ \  \___ \| __/ _ \| '__/ _ \
 / /| (_) | | | |  __/   ___) | || (_) | | |  __/
/____\___/|_| |_|\___|  |____/ \__\___/|_|  \___|
    "#
    );
}
