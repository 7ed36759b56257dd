//! Data models
//!
//! Shared between the zone server and its API consumers. Field names
//! follow the backing document format (`_id.$oid`, `zoneId`, snake_case
//! payload fields), not Rust conventions.

pub mod zone;

// Re-exports
pub use zone::*;
