// crates/citypref-core/src/config.rs

//! Resolver configuration: seed lists, storage key and geolocation endpoint.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PrefError, Result};
use crate::store::CITY_KEY;

/// Public IP-geolocation endpoint answering with a JSON object that carries
/// a `city` field.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Built-in city seed, used until the backend supplies an authoritative list.
pub const DEFAULT_CITIES: &[&str] = &[
    "toronto",
    "vancouver",
    "calgary",
    "montreal",
    "ottawa",
    "edmonton",
    "winnipeg",
    "halifax",
    "victoria",
    "quebec city",
    "hamilton",
    "kitchener",
    "london",
    "saskatoon",
    "regina",
];

/// Built-in business-type seed.
pub const DEFAULT_BUSINESS_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "retail",
    "grocery",
    "salon",
    "fitness",
    "services",
    "entertainment",
    "other",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrefConfig {
    pub seed_cities: Vec<String>,
    pub seed_business_types: Vec<String>,
    /// Key the chosen or inferred city is persisted under.
    pub storage_key: String,
    pub geolocation_url: String,
    /// Request timeout for the geolocation call. `None` waits indefinitely.
    pub geolocation_timeout_secs: Option<u64>,
    /// Whether the host is an interactive (browser-like) client. Location
    /// resolution is a no-op otherwise.
    pub interactive: bool,
}

impl Default for PrefConfig {
    fn default() -> Self {
        Self {
            seed_cities: DEFAULT_CITIES.iter().map(|s| s.to_string()).collect(),
            seed_business_types: DEFAULT_BUSINESS_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            storage_key: CITY_KEY.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            geolocation_timeout_secs: None,
            interactive: true,
        }
    }
}

impl PrefConfig {
    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PrefError::Config(format!("cannot open {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PrefError::Config("storage_key must not be empty".into()));
        }
        if self.geolocation_url.trim().is_empty() {
            return Err(PrefError::Config("geolocation_url must not be empty".into()));
        }
        Ok(())
    }

    pub fn geolocation_timeout(&self) -> Option<Duration> {
        self.geolocation_timeout_secs.map(Duration::from_secs)
    }

    /// Same seeds, but location resolution disabled.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }
}
