/// Service configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3003 | HTTP listen port |
/// | ZONES_FILE | geofencingDB.zones1.json | Backing document path |
/// | PERSIST | true | Mirror mutations back to the backing document |
/// | REROLL_RISK | true | Re-draw each zone's risk on load and update |
/// | ENVIRONMENT | development | Runtime environment label |
///
/// # Example
///
/// ```ignore
/// ZONES_FILE=/data/zones.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Path of the JSON backing document
    pub zones_file: String,
    /// Whether mutations are mirrored back to the backing document
    pub persist: bool,
    /// Whether risk is re-drawn on load and on every update. The upstream
    /// data pipeline relies on this; disable it to keep stored risk
    /// values authoritative.
    pub reroll_risk: bool,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
            zones_file: std::env::var("ZONES_FILE")
                .unwrap_or_else(|_| "geofencingDB.zones1.json".into()),
            persist: std::env::var("PERSIST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            reroll_risk: std::env::var("REROLL_RISK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the file path and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(zones_file: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.zones_file = zones_file.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
