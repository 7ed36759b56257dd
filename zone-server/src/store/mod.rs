//! Zone store - the in-memory collection and its JSON disk mirror
//!
//! The collection is the single owner of all zone records for the
//! process lifetime. The backing document is read once at startup and,
//! when persistence is enabled, overwritten after every successful
//! mutation. A write failure leaves the mutation in memory and the file
//! stale; it is logged and never surfaced to the caller.

pub mod file;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tokio::sync::RwLock;

use shared::models::{
    LegacyId, MIN_POLYGON_POINTS, RiskLevel, Zone, ZoneCreate, ZoneUpdate,
};

/// Store errors. Display text of the request-scoped variants is part of
/// the API contract with existing consumers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Geometry doit être un tableau de coordonnées avec au moins 3 points")]
    InvalidGeometry,

    #[error("Zone non trouvée")]
    NotFound,

    #[error("failed to read backing document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse backing document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store construction options
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Mirror mutations back to the backing document
    pub persist: bool,
    /// Re-draw risk on load and on every update
    pub reroll_risk: bool,
    /// Fixed RNG seed; tests use this to make risk assignment deterministic
    pub seed: Option<u64>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            persist: true,
            reroll_risk: true,
            seed: None,
        }
    }
}

struct Inner {
    zones: Vec<Zone>,
    /// Next `ZONE<k>` suffix. Monotonic for the process lifetime so ids
    /// are never reissued after a delete.
    next_seq: u64,
}

/// The zone collection.
///
/// All access goes through an `RwLock`: reads share, each mutation holds
/// the write lock across its whole read-modify-write-mirror sequence, so
/// concurrent requests cannot interleave and disk snapshots are written
/// in mutation order.
pub struct ZoneStore {
    inner: RwLock<Inner>,
    rng: Mutex<StdRng>,
    backing: Option<PathBuf>,
    reroll_risk: bool,
}

impl ZoneStore {
    /// Load the collection from the backing document.
    ///
    /// A missing or unparsable document logs the error and yields an
    /// empty collection; startup never fails on data.
    pub fn load(path: impl AsRef<Path>, opts: StoreOptions) -> Self {
        let path = path.as_ref();
        let zones = match file::load_zones(path) {
            Ok(zones) => {
                tracing::info!(count = zones.len(), path = %path.display(), "Zones loaded");
                zones
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load backing document, starting with an empty collection"
                );
                Vec::new()
            }
        };
        let backing = opts.persist.then(|| path.to_path_buf());
        Self::build(zones, backing, &opts)
    }

    /// An empty store with no backing document.
    pub fn in_memory(opts: StoreOptions) -> Self {
        Self::build(Vec::new(), None, &opts)
    }

    fn build(mut zones: Vec<Zone>, backing: Option<PathBuf>, opts: &StoreOptions) -> Self {
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        if opts.reroll_risk {
            for zone in &mut zones {
                zone.risk = RiskLevel::pick(&mut rng);
            }
        }
        let next_seq = zones.len() as u64 + 1;
        Self {
            inner: RwLock::new(Inner { zones, next_seq }),
            rng: Mutex::new(rng),
            backing,
            reroll_risk: opts.reroll_risk,
        }
    }

    /// Full collection in load/insertion order.
    pub async fn list(&self) -> Vec<Zone> {
        self.inner.read().await.zones.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.zones.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.zones.is_empty()
    }

    /// First zone matching the key by legacy id or `zoneId`.
    pub async fn find(&self, key: &str) -> Option<Zone> {
        self.inner
            .read()
            .await
            .zones
            .iter()
            .find(|z| z.matches(key))
            .cloned()
    }

    /// Validate and append a new zone, then mirror to disk.
    pub async fn create(&self, payload: ZoneCreate) -> StoreResult<Zone> {
        if !payload
            .geometry
            .as_ref()
            .is_some_and(|g| g.len() >= MIN_POLYGON_POINTS)
        {
            return Err(StoreError::InvalidGeometry);
        }

        let risk = self.draw_risk();
        let mut inner = self.inner.write().await;
        let zone_id = format!("ZONE{}", inner.next_seq);
        inner.next_seq += 1;
        let zone = payload.into_zone(LegacyId::generate(Utc::now()), zone_id, risk);
        inner.zones.push(zone.clone());
        self.mirror(&inner.zones);
        Ok(zone)
    }

    /// Merge a partial update into the matching zone, re-draw its risk,
    /// then mirror to disk.
    pub async fn update(&self, key: &str, update: ZoneUpdate) -> StoreResult<Zone> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .zones
            .iter()
            .position(|z| z.matches(key))
            .ok_or(StoreError::NotFound)?;

        inner.zones[idx].apply(update);
        if self.reroll_risk {
            inner.zones[idx].risk = self.draw_risk();
        }
        let zone = inner.zones[idx].clone();
        self.mirror(&inner.zones);
        Ok(zone)
    }

    /// Remove the matching zone, mirror to disk, and return the removed
    /// record.
    pub async fn delete(&self, key: &str) -> StoreResult<Zone> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .zones
            .iter()
            .position(|z| z.matches(key))
            .ok_or(StoreError::NotFound)?;

        let zone = inner.zones.remove(idx);
        self.mirror(&inner.zones);
        Ok(zone)
    }

    fn draw_risk(&self) -> RiskLevel {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        RiskLevel::pick(&mut *rng)
    }

    /// Overwrite the backing document with the current collection.
    /// Failure is logged and swallowed; in-memory state keeps the
    /// mutation and the file stays stale until the next successful write.
    fn mirror(&self, zones: &[Zone]) {
        let Some(path) = &self.backing else { return };
        if let Err(e) = file::save_zones(path, zones) {
            tracing::error!(path = %path.display(), error = %e, "Failed to persist zone collection");
        }
    }
}
