//! Scriptable mock of the remote API boundary
//!
//! Implements `RemoteFetch` with per-path scripted responses, call
//! recording, and an optional artificial delay so tests can hold a request
//! in flight while more callers attach to it.

use async_trait::async_trait;
use cinedb_client_core::error::{Error, Result};
use cinedb_client_core::params::RequestParams;
use cinedb_client_core::remote::RemoteFetch;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Mock remote with scripted per-path behavior
///
/// Responses queued with `enqueue`/`enqueue_error` are consumed one per
/// call; `set_response` installs a sticky fallback served once the queue
/// for that path is empty. A call to a path with nothing scripted fails
/// loudly so tests notice unexpected traffic.
#[derive(Default)]
pub struct MockRemote {
    queued: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    sticky: Mutex<HashMap<String, Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
    delay: Mutex<Option<Duration>>,
}

/// One recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub cache_key: String,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one successful response for `path`
    pub fn enqueue(&self, path: &str, value: Value) {
        self.queued
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Ok(value));
    }

    /// Queue one failure for `path`
    pub fn enqueue_error(&self, path: &str, error: Error) {
        self.queued
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Err(error));
    }

    /// Install a sticky response served whenever the queue is empty
    pub fn set_response(&self, path: &str, value: Value) {
        self.sticky
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(value));
    }

    /// Install a sticky failure served whenever the queue is empty
    pub fn set_error(&self, path: &str, error: Error) {
        self.sticky
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(error));
    }

    /// Delay every call by `duration` (keeps requests observably in flight)
    pub fn set_delay(&self, duration: Duration) {
        *self.delay.lock().unwrap() = Some(duration);
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls issued to exactly `path`
    pub fn call_count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.path == path)
            .count()
    }

    /// Total number of calls across all paths
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, method: &'static str, path: &str, params: &RequestParams) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            cache_key: params.cache_key(path),
        });
    }

    fn resolve(&self, path: &str) -> Result<Value> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(path) {
            if let Some(result) = queue.pop_front() {
                return result;
            }
        }
        if let Some(result) = self.sticky.lock().unwrap().get(path) {
            return result.clone();
        }
        Err(Error::invalid_response(
            path,
            "no scripted response in MockRemote",
        ))
    }

    async fn maybe_delay(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(duration) = delay {
            tokio::time::sleep(duration).await;
        }
    }
}

#[async_trait]
impl RemoteFetch for MockRemote {
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value> {
        self.record("GET", path, params);
        self.maybe_delay().await;
        self.resolve(path)
    }

    async fn post(&self, path: &str, params: &RequestParams, _body: Value) -> Result<Value> {
        self.record("POST", path, params);
        self.maybe_delay().await;
        self.resolve(path)
    }
}
