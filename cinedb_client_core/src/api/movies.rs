//! Movie endpoints

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{
    Credits, ImageCollection, MovieDetail, MovieSummary, Paged, Review, VideoCollection,
};
use crate::params::RequestParams;
use crate::remote::RemoteFetch;
use serde_json::json;
use std::sync::Arc;

/// Movie API group
pub struct MoviesApi {
    coordinator: Arc<RequestCoordinator>,
    remote: Arc<dyn RemoteFetch>,
}

impl MoviesApi {
    pub fn new(coordinator: Arc<RequestCoordinator>, remote: Arc<dyn RemoteFetch>) -> Self {
        Self {
            coordinator,
            remote,
        }
    }

    async fn feed(
        &self,
        path: &str,
        page: u32,
        force_refresh: bool,
    ) -> Result<Paged<MovieSummary>> {
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(path, &params, force_refresh)
            .await?;
        decode(path, value)
    }

    pub async fn popular(&self, page: u32, force_refresh: bool) -> Result<Paged<MovieSummary>> {
        self.feed("/movie/popular", page, force_refresh).await
    }

    pub async fn top_rated(&self, page: u32, force_refresh: bool) -> Result<Paged<MovieSummary>> {
        self.feed("/movie/top_rated", page, force_refresh).await
    }

    pub async fn now_playing(&self, page: u32, force_refresh: bool) -> Result<Paged<MovieSummary>> {
        self.feed("/movie/now_playing", page, force_refresh).await
    }

    pub async fn upcoming(&self, page: u32, force_refresh: bool) -> Result<Paged<MovieSummary>> {
        self.feed("/movie/upcoming", page, force_refresh).await
    }

    pub async fn detail(&self, id: u64, force_refresh: bool) -> Result<MovieDetail> {
        let path = format!("/movie/{id}");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), force_refresh)
            .await?;
        decode(&path, value)
    }

    pub async fn credits(&self, id: u64) -> Result<Credits> {
        let path = format!("/movie/{id}/credits");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn images(&self, id: u64) -> Result<ImageCollection> {
        let path = format!("/movie/{id}/images");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn videos(&self, id: u64) -> Result<VideoCollection> {
        let path = format!("/movie/{id}/videos");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    /// One page of reviews; incremental accumulation lives in `ReviewFeed`
    pub async fn reviews(&self, id: u64, page: u32) -> Result<Paged<Review>> {
        let path = format!("/movie/{id}/reviews");
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(&path, &params, false)
            .await?;
        decode(&path, value)
    }

    pub async fn similar(&self, id: u64, page: u32) -> Result<Paged<MovieSummary>> {
        self.feed(&format!("/movie/{id}/similar"), page, false).await
    }

    pub async fn recommendations(&self, id: u64, page: u32) -> Result<Paged<MovieSummary>> {
        self.feed(&format!("/movie/{id}/recommendations"), page, false)
            .await
    }

    /// Submit a rating. Writes bypass the cache and the coordinator.
    pub async fn rate(&self, id: u64, score: f64) -> Result<()> {
        let path = format!("/movie/{id}/rating");
        self.remote
            .post(&path, &RequestParams::new(), json!({ "value": score }))
            .await?;
        Ok(())
    }
}
