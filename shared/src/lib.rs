//! Shared types for the zone store service
//!
//! Data model and response structures used by the server and by API
//! consumers (the wire shape of [`models::Zone`] is a compatibility
//! contract with the existing backing documents).

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{GeoPoint, LegacyId, RiskLevel, Zone, ZoneCreate, ZoneTags, ZoneUpdate};
pub use response::MutationResponse;
