//! Discover endpoints with typed filters
//!
//! `DiscoverFilter` is where absent-parameter omission matters most: every
//! field is optional, and unset fields never appear in the request or the
//! cache key.

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{MovieSummary, Paged, TvSummary};
use crate::params::RequestParams;
use std::sync::Arc;

/// Optional discover filters; unset fields are omitted from the request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverFilter {
    pub sort_by: Option<String>,
    pub with_genres: Option<String>,
    pub year: Option<u32>,
    pub vote_average_gte: Option<f64>,
    pub vote_count_gte: Option<u32>,
}

impl DiscoverFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.with_genres = Some(genres.into());
        self
    }

    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn vote_average_gte(mut self, minimum: f64) -> Self {
        self.vote_average_gte = Some(minimum);
        self
    }

    pub fn vote_count_gte(mut self, minimum: u32) -> Self {
        self.vote_count_gte = Some(minimum);
        self
    }

    fn into_params(self, page: u32) -> RequestParams {
        RequestParams::new()
            .with_page(page.max(1))
            .set_opt("sort_by", self.sort_by)
            .set_opt("with_genres", self.with_genres)
            .set_opt("year", self.year)
            .set_opt("vote_average.gte", self.vote_average_gte)
            .set_opt("vote_count.gte", self.vote_count_gte)
    }
}

/// Discover API group
pub struct DiscoverApi {
    coordinator: Arc<RequestCoordinator>,
}

impl DiscoverApi {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self { coordinator }
    }

    pub async fn movies(&self, filter: DiscoverFilter, page: u32) -> Result<Paged<MovieSummary>> {
        let path = "/discover/movie";
        let value = self
            .coordinator
            .fetch_with_cache(path, &filter.into_params(page), false)
            .await?;
        decode(path, value)
    }

    pub async fn tv(&self, filter: DiscoverFilter, page: u32) -> Result<Paged<TvSummary>> {
        let path = "/discover/tv";
        let value = self
            .coordinator
            .fetch_with_cache(path, &filter.into_params(page), false)
            .await?;
        decode(path, value)
    }
}
