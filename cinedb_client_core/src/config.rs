//! Client configuration
//!
//! All endpoints and credentials are explicit configuration values passed in
//! at composition time. There is no module-level mutable state; independent
//! client instances (e.g. one per test, with a fake clock) are cheap.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default detail-cache time-to-live: one hour.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Core client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API credential, sent as both query parameter and bearer header
    #[serde(default)]
    pub api_key: String,
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for derived image URLs
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Default language attached to every request that does not set one
    #[serde(default = "default_language")]
    pub language: String,
    /// Detail-cache TTL in seconds
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "ko-KR".to_string()
}

fn default_cache_ttl_seconds() -> u64 {
    DEFAULT_CACHE_TTL.as_secs()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults elsewhere
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Cache TTL as a `Duration`
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Validate the configuration before constructing a client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::invalid_configuration(
                "API key is not set (configure api_key or CINEDB_API_KEY)",
            ));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(Error::invalid_configuration(format!(
                "base_url is not a valid URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
