//! API response structures

use serde::{Deserialize, Serialize};

use crate::models::Zone;

/// Envelope returned by mutating zone endpoints: a human-readable
/// confirmation plus the affected record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    pub zone: Zone,
}

impl MutationResponse {
    pub fn new(message: impl Into<String>, zone: Zone) -> Self {
        Self {
            message: message.into(),
            zone,
        }
    }
}
