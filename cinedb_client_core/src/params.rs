//! Request parameters and cache-key derivation
//!
//! `RequestParams` is an immutable, order-independent set of query
//! parameters. Two logically equal parameter sets always render the same
//! cache key, regardless of the order in which they were built. Absent
//! values are never stored, so they never serialize as empty strings.

use std::collections::BTreeMap;
use std::fmt;

/// Immutable query-parameter set with deterministic key rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the same name
    pub fn set(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Set a parameter only when the value is present
    pub fn set_opt(self, name: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        self.set("page", page)
    }

    pub fn with_language(self, language: &str) -> Self {
        self.set("language", language)
    }

    pub fn with_query(self, query: &str) -> Self {
        self.set("query", query)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over parameters in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Render the deterministic cache key for this parameter set at `path`
    ///
    /// Equal parameter sets produce equal keys; parameter insertion order is
    /// irrelevant because rendering follows sorted name order.
    pub fn cache_key(&self, path: &str) -> String {
        if self.values.is_empty() {
            return path.to_string();
        }
        let query: Vec<String> = self
            .values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("{path}?{}", query.join("&"))
    }
}
