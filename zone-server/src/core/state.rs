use std::sync::Arc;

use crate::core::Config;
use crate::store::{StoreOptions, ZoneStore};

/// Shared request-handler state.
///
/// The zone collection is an explicitly owned store handed to handlers
/// through axum state rather than a module-level global, so tests can
/// build isolated instances and concurrency control lives in one place.
#[derive(Clone)]
pub struct ServerState {
    /// Service configuration
    pub config: Config,
    /// The zone collection and its disk mirror
    pub zones: Arc<ZoneStore>,
}

impl ServerState {
    pub fn new(config: Config, zones: Arc<ZoneStore>) -> Self {
        Self { config, zones }
    }

    /// Load the zone collection according to the configuration.
    ///
    /// A missing or corrupt backing document logs an error and yields an
    /// empty collection; the service starts regardless.
    pub fn initialize(config: &Config) -> Self {
        let opts = StoreOptions {
            persist: config.persist,
            reroll_risk: config.reroll_risk,
            ..Default::default()
        };
        let store = ZoneStore::load(&config.zones_file, opts);
        Self::new(config.clone(), Arc::new(store))
    }
}
