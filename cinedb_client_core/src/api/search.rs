//! Search endpoints

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{MovieSummary, MultiResult, NamedResult, Paged, PersonSummary, TvSummary};
use crate::params::RequestParams;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Search API group
pub struct SearchApi {
    coordinator: Arc<RequestCoordinator>,
}

impl SearchApi {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self { coordinator }
    }

    /// A well-formed page with zero hits surfaces as `Error::EmptyResult`,
    /// so callers can render an empty state instead of a blank list.
    async fn query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        page: u32,
    ) -> Result<Paged<T>> {
        let params = RequestParams::new()
            .with_query(query)
            .with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(path, &params, false)
            .await?;
        decode::<Paged<T>>(path, value)?.require_results(path)
    }

    pub async fn movies(&self, query: &str, page: u32) -> Result<Paged<MovieSummary>> {
        self.query("/search/movie", query, page).await
    }

    pub async fn tv(&self, query: &str, page: u32) -> Result<Paged<TvSummary>> {
        self.query("/search/tv", query, page).await
    }

    pub async fn people(&self, query: &str, page: u32) -> Result<Paged<PersonSummary>> {
        self.query("/search/person", query, page).await
    }

    /// Mixed movie/TV/person results in one list
    pub async fn multi(&self, query: &str, page: u32) -> Result<Paged<MultiResult>> {
        self.query("/search/multi", query, page).await
    }

    pub async fn companies(&self, query: &str, page: u32) -> Result<Paged<NamedResult>> {
        self.query("/search/company", query, page).await
    }

    pub async fn collections(&self, query: &str, page: u32) -> Result<Paged<NamedResult>> {
        self.query("/search/collection", query, page).await
    }

    pub async fn keywords(&self, query: &str, page: u32) -> Result<Paged<NamedResult>> {
        self.query("/search/keyword", query, page).await
    }
}
