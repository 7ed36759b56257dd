//! Backing document IO
//!
//! The backing document is a JSON array of zone objects, read once at
//! startup and overwritten wholesale after every mutation.

use std::fs;
use std::path::Path;

use shared::models::Zone;

use super::StoreResult;

pub fn load_zones(path: &Path) -> StoreResult<Vec<Zone>> {
    let raw = fs::read_to_string(path)?;
    let zones = serde_json::from_str(&raw)?;
    Ok(zones)
}

/// Whole-document overwrite. The document is written to a sibling temp
/// file and renamed over the target so a crash mid-write cannot leave a
/// half-serialized document behind.
pub fn save_zones(path: &Path, zones: &[Zone]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(zones)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
