//! Zone Model

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single polygon vertex, `[longitude, latitude]`.
pub type GeoPoint = [f64; 2];

/// Minimum number of vertices for a valid polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Legacy structured identifier carried over from the MongoDB export
/// format (`{"_id": {"$oid": "..."}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyId {
    #[serde(rename = "$oid")]
    pub oid: String,
}

impl LegacyId {
    /// Build a synthetic id from a timestamp, matching the format the
    /// existing documents use for server-created zones.
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self {
            oid: format!("zoneId_{}", now.timestamp_millis()),
        }
    }
}

/// Risk classification of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Draw a uniformly random level. The RNG is injected so callers can
    /// seed it deterministically.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Zone metadata tags. `landuse` is always present; any other keys found
/// in the backing document are preserved on round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTags {
    #[serde(default = "default_landuse")]
    pub landuse: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_landuse() -> String {
    "unknown".to_string()
}

impl Default for ZoneTags {
    fn default() -> Self {
        Self {
            landuse: default_landuse(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Zone entity. Serialized field names (`_id.$oid`, `zoneId`, snake_case
/// sequences) are a compatibility contract with the backing document and
/// its existing consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LegacyId>,
    #[serde(rename = "zoneId", default)]
    pub zone_id: String,
    #[serde(default)]
    pub geometry: Vec<GeoPoint>,
    #[serde(default)]
    pub risk: RiskLevel,
    #[serde(default)]
    pub tags: ZoneTags,
    #[serde(default)]
    pub bounding_box: Vec<Value>,
    #[serde(default)]
    pub buildings: Vec<Value>,
    #[serde(default)]
    pub cross_walks: u64,
    #[serde(default)]
    pub routes: Vec<Value>,
}

impl Zone {
    /// Dual-identifier match: a lookup key addresses a zone either by its
    /// structured legacy id or by its plain `zoneId`.
    pub fn matches(&self, key: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.oid == key) || self.zone_id == key
    }

    /// Merge a partial update into the zone.
    ///
    /// Sequences and tags replace the stored value only when the request
    /// provides one. `cross_walks` replaces whenever explicitly provided,
    /// including zero. Risk is not touched here; the store owns risk
    /// assignment.
    pub fn apply(&mut self, update: ZoneUpdate) {
        if let Some(geometry) = update.geometry {
            self.geometry = geometry;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(bounding_box) = update.bounding_box {
            self.bounding_box = bounding_box;
        }
        if let Some(buildings) = update.buildings {
            self.buildings = buildings;
        }
        if let Some(cross_walks) = update.cross_walks {
            self.cross_walks = cross_walks;
        }
        if let Some(routes) = update.routes {
            self.routes = routes;
        }
    }
}

/// Create zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub geometry: Option<Vec<GeoPoint>>,
    pub tags: Option<ZoneTags>,
    pub bounding_box: Option<Vec<Value>>,
    pub buildings: Option<Vec<Value>>,
    pub cross_walks: Option<u64>,
    pub routes: Option<Vec<Value>>,
}

impl ZoneCreate {
    /// Build the stored zone once identifiers and risk have been
    /// assigned, defaulting every omitted optional field.
    pub fn into_zone(self, id: LegacyId, zone_id: String, risk: RiskLevel) -> Zone {
        Zone {
            id: Some(id),
            zone_id,
            geometry: self.geometry.unwrap_or_default(),
            risk,
            tags: self.tags.unwrap_or_default(),
            bounding_box: self.bounding_box.unwrap_or_default(),
            buildings: self.buildings.unwrap_or_default(),
            cross_walks: self.cross_walks.unwrap_or_default(),
            routes: self.routes.unwrap_or_default(),
        }
    }
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneUpdate {
    pub geometry: Option<Vec<GeoPoint>>,
    pub tags: Option<ZoneTags>,
    pub bounding_box: Option<Vec<Value>>,
    pub buildings: Option<Vec<Value>>,
    pub cross_walks: Option<u64>,
    pub routes: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn sample_zone() -> Zone {
        Zone {
            id: Some(LegacyId {
                oid: "64f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            }),
            zone_id: "ZONE1".to_string(),
            geometry: vec![[2.35, 48.85], [2.36, 48.85], [2.36, 48.86]],
            risk: RiskLevel::Medium,
            tags: ZoneTags {
                landuse: "residential".to_string(),
                extra: serde_json::Map::new(),
            },
            bounding_box: vec![],
            buildings: vec![],
            cross_walks: 2,
            routes: vec![],
        }
    }

    #[test]
    fn wire_format_uses_document_field_names() {
        let value = serde_json::to_value(sample_zone()).unwrap();
        assert_eq!(value["_id"]["$oid"], "64f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(value["zoneId"], "ZONE1");
        assert_eq!(value["risk"], "medium");
        assert_eq!(value["tags"]["landuse"], "residential");
        assert_eq!(value["cross_walks"], 2);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let zone: Zone = serde_json::from_value(json!({
            "zoneId": "ZONE9",
            "geometry": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
        }))
        .unwrap();
        assert!(zone.id.is_none());
        assert_eq!(zone.risk, RiskLevel::Low);
        assert_eq!(zone.tags.landuse, "unknown");
        assert!(zone.bounding_box.is_empty());
        assert!(zone.buildings.is_empty());
        assert!(zone.routes.is_empty());
        assert_eq!(zone.cross_walks, 0);
    }

    #[test]
    fn unknown_tag_keys_round_trip() {
        let zone: Zone = serde_json::from_value(json!({
            "zoneId": "ZONE2",
            "tags": {"landuse": "industrial", "name": "docks"}
        }))
        .unwrap();
        assert_eq!(zone.tags.extra["name"], "docks");
        let back = serde_json::to_value(&zone).unwrap();
        assert_eq!(back["tags"]["name"], "docks");
    }

    #[test]
    fn matches_either_identifier() {
        let zone = sample_zone();
        assert!(zone.matches("64f1a2b3c4d5e6f7a8b9c0d1"));
        assert!(zone.matches("ZONE1"));
        assert!(!zone.matches("ZONE2"));
    }

    #[test]
    fn apply_replaces_provided_fields_only() {
        let mut zone = sample_zone();
        let original_geometry = zone.geometry.clone();
        zone.apply(ZoneUpdate {
            cross_walks: Some(0),
            ..Default::default()
        });
        assert_eq!(zone.cross_walks, 0);
        assert_eq!(zone.geometry, original_geometry);
        assert_eq!(zone.tags.landuse, "residential");
    }

    #[test]
    fn apply_accepts_explicit_empty_sequences() {
        let mut zone = sample_zone();
        zone.apply(ZoneUpdate {
            geometry: Some(vec![]),
            ..Default::default()
        });
        assert!(zone.geometry.is_empty());
    }

    #[test]
    fn risk_pick_is_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let left: Vec<_> = (0..16).map(|_| RiskLevel::pick(&mut a)).collect();
        let right: Vec<_> = (0..16).map(|_| RiskLevel::pick(&mut b)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn legacy_id_derives_from_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(LegacyId::generate(now).oid, "zoneId_1700000000123");
    }

    #[test]
    fn create_payload_defaults_omitted_fields() {
        let payload: ZoneCreate = serde_json::from_value(json!({
            "geometry": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
        }))
        .unwrap();
        let zone = payload.into_zone(
            LegacyId::generate(Utc.timestamp_millis_opt(0).unwrap()),
            "ZONE4".to_string(),
            RiskLevel::High,
        );
        assert_eq!(zone.zone_id, "ZONE4");
        assert_eq!(zone.risk, RiskLevel::High);
        assert_eq!(zone.tags.landuse, "unknown");
        assert_eq!(zone.cross_walks, 0);
    }
}
