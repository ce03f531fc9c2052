//! Remote HTTP client for the media metadata API
//!
//! This is the only module that touches the network. It builds request URLs
//! from the configured base, attaches the API credential both as an
//! `api_key` query parameter and as a bearer header (the remote accepts
//! either auth mode), and maps transport and status failures onto the
//! library error taxonomy. It never retries and never touches cache state;
//! both of those concerns belong to the request coordinator.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::RequestParams;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Boundary trait over the remote API, mockable in tests
#[async_trait]
pub trait RemoteFetch: Send + Sync {
    /// Issue a GET request and return the parsed JSON body
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value>;

    /// Issue a POST request with a JSON body and return the parsed response
    async fn post(&self, path: &str, params: &RequestParams, body: Value) -> Result<Value>;
}

/// HTTP client bound to one base endpoint and one credential
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// Build the full request URL: base + path + credential + parameters
    ///
    /// The configured default language is attached unless the caller set one
    /// explicitly. Absent parameters never reach this point (see
    /// `RequestParams`), so nothing serializes as an empty value.
    fn build_url(&self, path: &str, params: &RequestParams) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| Error::invalid_configuration(format!("bad request URL {joined}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            if !params.contains("language") {
                query.append_pair("language", &self.language);
            }
            for (name, value) in params.iter() {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder, path: &str) -> Result<Value> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP {} from {path}", status.as_u16());
            return Err(Error::http(status.as_u16(), path));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::invalid_response(path, e.to_string()))
    }
}

#[async_trait]
impl RemoteFetch for RemoteClient {
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value> {
        let url = self.build_url(path, params)?;
        log::debug!("GET {path}");
        self.dispatch(self.http.get(url), path).await
    }

    async fn post(&self, path: &str, params: &RequestParams, body: Value) -> Result<Value> {
        let url = self.build_url(path, params)?;
        log::debug!("POST {path}");
        self.dispatch(self.http.post(url).json(&body), path).await
    }
}
