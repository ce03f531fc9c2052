//! Typed capability modules over the shared request coordinator
//!
//! Each API group (movies, TV, people, search, discover, trending, genres)
//! is an independent struct with a narrow surface, composed by
//! `CatalogClient` rather than flattened into one object. All reads go
//! through the coordinator and therefore through the cache and the
//! in-flight de-duplication table; the only writes (ratings) go straight to
//! the remote client.

pub mod discover;
pub mod genres;
pub mod movies;
pub mod people;
pub mod search;
pub mod trending;
pub mod tv;

pub use discover::{DiscoverApi, DiscoverFilter};
pub use genres::GenresApi;
pub use movies::MoviesApi;
pub use people::PeopleApi;
pub use search::SearchApi;
pub use trending::TrendingApi;
pub use tv::TvApi;

use crate::cache::{CacheStats, CacheStore};
use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::coordinator::RequestCoordinator;
use crate::error::{Error, Result};
use crate::remote::{RemoteClient, RemoteFetch};
use crate::reviews::ReviewFeed;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Decode a raw JSON response into `T`, mapping shape mismatches
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::invalid_response(endpoint, e.to_string()))
}

/// Composition root: one configured client with its cache and coordinator
///
/// Construction wires the remote client, cache store and coordinator
/// together from an explicit `ClientConfig`; there is no global state, so
/// independent instances coexist (tests build one per case with a fake
/// clock via `with_parts`).
pub struct CatalogClient {
    coordinator: Arc<RequestCoordinator>,
    remote: Arc<dyn RemoteFetch>,
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let remote: Arc<dyn RemoteFetch> = Arc::new(RemoteClient::new(&config)?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Ok(Self::with_parts(remote, clock, config))
    }

    /// Assemble a client from explicit parts (mock remote, fake clock)
    pub fn with_parts(
        remote: Arc<dyn RemoteFetch>,
        clock: Arc<dyn Clock>,
        config: ClientConfig,
    ) -> Self {
        let cache = Arc::new(CacheStore::new(clock));
        let coordinator = Arc::new(RequestCoordinator::new(
            remote.clone(),
            cache,
            config.cache_ttl(),
        ));
        Self {
            coordinator,
            remote,
            config,
        }
    }

    pub fn movies(&self) -> MoviesApi {
        MoviesApi::new(self.coordinator.clone(), self.remote.clone())
    }

    pub fn tv(&self) -> TvApi {
        TvApi::new(self.coordinator.clone(), self.remote.clone())
    }

    pub fn people(&self) -> PeopleApi {
        PeopleApi::new(self.coordinator.clone())
    }

    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.coordinator.clone())
    }

    pub fn discover(&self) -> DiscoverApi {
        DiscoverApi::new(self.coordinator.clone())
    }

    pub fn trending(&self) -> TrendingApi {
        TrendingApi::new(self.coordinator.clone())
    }

    pub fn genres(&self) -> GenresApi {
        GenresApi::new(self.coordinator.clone())
    }

    /// Review feed backed by this client's coordinator
    pub fn review_feed(&self) -> ReviewFeed {
        ReviewFeed::new(self.coordinator.clone())
    }

    /// The shared coordinator (the sanctioned fetch entry point)
    pub fn coordinator(&self) -> &Arc<RequestCoordinator> {
        &self.coordinator
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL for derived image URLs
    pub fn image_base(&self) -> &str {
        &self.config.image_base_url
    }

    /// Wipe the detail cache
    pub async fn clear_cache(&self) {
        self.coordinator.clear_cache().await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.coordinator.cache().stats().await
    }
}
