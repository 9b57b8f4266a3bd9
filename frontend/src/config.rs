use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.coindesk.com/v1/bpi/currentprice.json";
pub const DEFAULT_VND_PER_USD: f64 = 25380.0;

const RATE_CONFIG_KEY: &str = "rate_config";

/// Where Bitcoin prices come from and how USD converts to VND.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateConfig {
    pub endpoint: String,
    pub vnd_per_usd: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            vnd_per_usd: DEFAULT_VND_PER_USD,
        }
    }
}

impl RateConfig {
    /// Parses a stored override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

pub fn load_rate_config() -> RateConfig {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(RATE_CONFIG_KEY) {
                match RateConfig::from_json(&raw) {
                    Ok(config) => return config,
                    Err(err) => warn!("ignoring stored {}: {}", RATE_CONFIG_KEY, err),
                }
            }
        }
    }
    RateConfig::default()
}
