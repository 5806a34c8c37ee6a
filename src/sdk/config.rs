use std::env;

const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
const BASE_URL_VAR: &str = "GOOGLE_MAPS_BASE_URL";

/// How the tool talks to the Google Maps APIs for this run.
pub enum MapsConfig {
    /// Full flow: Directions + Static Maps with this key.
    Keyed { api_key: String },
    /// No key available. Only the shareable link is produced.
    Anonymous,
}

impl MapsConfig {
    pub fn from_env() -> Self {
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => MapsConfig::Keyed { api_key: key },
            _ => MapsConfig::Anonymous,
        }
    }
}

/// Optional override for the Google Maps API host, e.g. a local stub server.
pub fn base_url_override() -> Option<String> {
    env::var(BASE_URL_VAR)
        .ok()
        .filter(|base| !base.trim().is_empty())
}
