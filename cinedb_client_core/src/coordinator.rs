//! Request coordinator: cache-check-then-fetch with in-flight de-duplication
//!
//! Single entry point between callers and the network. Per cache key the
//! coordinator runs a small state machine, Idle -> Loading -> Idle; callers
//! that arrive while a key is Loading attach to the outstanding request
//! instead of re-entering it, so at most one network call per key is in
//! flight at any instant.
//!
//! The in-flight check and follower registration happen under one lock
//! acquisition with no await point in between, which is what makes the
//! check-then-act sequence atomic with respect to re-entrant callers.
//!
//! The network call itself runs on a detached task. Every caller, the one
//! that started the request included, just awaits its notification channel,
//! so dropping any caller mid-flight never cancels the shared request or
//! strands the others.

use crate::cache::CacheStore;
use crate::error::{Error, Result};
use crate::params::RequestParams;
use crate::remote::RemoteFetch;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};

type Waiter = oneshot::Sender<Result<Value>>;

/// Coordinates cached fetches against the remote API
pub struct RequestCoordinator {
    remote: Arc<dyn RemoteFetch>,
    cache: Arc<CacheStore>,
    ttl: Duration,
    /// Key present => request Loading. The Vec holds every caller to notify.
    /// Shared with the detached fetch tasks, which remove the entry and fan
    /// the result out when the request settles.
    in_flight: Arc<Mutex<HashMap<String, Vec<Waiter>>>>,
}

impl RequestCoordinator {
    pub fn new(remote: Arc<dyn RemoteFetch>, cache: Arc<CacheStore>, ttl: Duration) -> Self {
        Self {
            remote,
            cache,
            ttl,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Fetch `path` with `params`, consulting the cache first
    ///
    /// With `force_refresh` false, a fresh cached value is returned without
    /// any network activity. Otherwise the caller either starts a new network
    /// request or attaches to the one already in flight for the same key.
    /// Every attached caller receives the same value or the same error, and
    /// the request runs to completion even if the caller that started it is
    /// dropped. A failed fetch leaves the cache untouched, so the
    /// last-known-good value (if any) survives.
    pub async fn fetch_with_cache(
        &self,
        path: &str,
        params: &RequestParams,
        force_refresh: bool,
    ) -> Result<Value> {
        let key = params.cache_key(path);

        if !force_refresh {
            if let Some(entry) = self.cache.get(&key).await {
                if self.cache.is_fresh(&entry, self.ttl) {
                    log::debug!("cache hit for {key}");
                    return Ok(entry.value);
                }
                log::debug!("cache entry for {key} is stale");
            }
        }

        // Check-then-register atomically: one lock acquisition, no await.
        let (rx, started) = {
            let mut in_flight = self.in_flight.lock().await;
            let (tx, rx) = oneshot::channel();
            match in_flight.get_mut(&key) {
                Some(waiters) => {
                    waiters.push(tx);
                    (rx, false)
                }
                None => {
                    in_flight.insert(key.clone(), vec![tx]);
                    (rx, true)
                }
            }
        };

        if started {
            log::debug!("issuing network request for {key}");
            self.spawn_fetch(key.clone(), path.to_string(), params.clone());
        } else {
            log::debug!("attaching to in-flight request for {key}");
        }

        match rx.await {
            Ok(result) => result,
            // Only reachable if the fetch task itself dies.
            Err(_) => Err(Error::network(format!(
                "in-flight request for {key} was abandoned"
            ))),
        }
    }

    /// Run the shared request on its own task: fetch, write back on success,
    /// remove the in-flight entry unconditionally, then fan the result out.
    fn spawn_fetch(&self, key: String, path: String, params: RequestParams) {
        let remote = self.remote.clone();
        let cache = self.cache.clone();
        let in_flight = self.in_flight.clone();
        tokio::spawn(async move {
            let result = remote.get(&path, &params).await;

            if let Ok(value) = &result {
                cache.put(&key, value.clone()).await;
            }

            let waiters = {
                let mut in_flight = in_flight.lock().await;
                in_flight.remove(&key).unwrap_or_default()
            };
            for waiter in waiters {
                let _ = waiter.send(result.clone());
            }
        });
    }

    /// Whether a request for this path/params is currently in flight
    pub async fn is_loading(&self, path: &str, params: &RequestParams) -> bool {
        let key = params.cache_key(path);
        self.in_flight.lock().await.contains_key(&key)
    }

    /// Evict one cached key (the next non-forced fetch will hit the network)
    pub async fn evict(&self, path: &str, params: &RequestParams) {
        let key = params.cache_key(path);
        self.cache.evict(&key).await;
    }

    /// Wipe the whole detail cache
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// The cache store behind this coordinator
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
