//! Server configuration.

use std::env;
use std::path::PathBuf;

use auth::SessionLatency;
use event_store::{CapacityPolicy, CatalogLatency};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Directory holding the persisted session.
    pub data_dir: PathBuf,
    /// JSON file to seed the catalog from instead of the built-in events.
    pub seed_file: Option<PathBuf>,
    /// Whether the catalog refuses registrations past capacity.
    pub capacity_policy: CapacityPolicy,
    /// Whether store operations wait out their artificial delays.
    pub simulated_latency: bool,
    /// Log level.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 54880,
            data_dir: PathBuf::from(".campus-events"),
            seed_file: None,
            capacity_policy: CapacityPolicy::default(),
            simulated_latency: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to the defaults
    /// for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let capacity_policy = match lookup("CAMPUS_CAPACITY_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|e: String| anyhow::anyhow!("CAMPUS_CAPACITY_POLICY: {e}"))?,
            None => defaults.capacity_policy,
        };

        Ok(Self {
            host: lookup("CAMPUS_SERVER_HOST").unwrap_or(defaults.host),
            port: lookup("CAMPUS_SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: lookup("CAMPUS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            seed_file: lookup("CAMPUS_SEED_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            capacity_policy,
            simulated_latency: lookup("CAMPUS_SIMULATED_LATENCY")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.simulated_latency),
            log_level: lookup("CAMPUS_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the delays the catalog store should apply.
    pub fn catalog_latency(&self) -> CatalogLatency {
        if self.simulated_latency {
            CatalogLatency::default()
        } else {
            CatalogLatency::none()
        }
    }

    /// Returns the delays the session store should apply.
    pub fn session_latency(&self) -> SessionLatency {
        if self.simulated_latency {
            SessionLatency::default()
        } else {
            SessionLatency::none()
        }
    }
}
