//! TV endpoints, mirroring the movie group

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{Credits, ImageCollection, Paged, Review, TvDetail, TvSummary, VideoCollection};
use crate::params::RequestParams;
use crate::remote::RemoteFetch;
use serde_json::json;
use std::sync::Arc;

/// TV API group
pub struct TvApi {
    coordinator: Arc<RequestCoordinator>,
    remote: Arc<dyn RemoteFetch>,
}

impl TvApi {
    pub fn new(coordinator: Arc<RequestCoordinator>, remote: Arc<dyn RemoteFetch>) -> Self {
        Self {
            coordinator,
            remote,
        }
    }

    async fn feed(&self, path: &str, page: u32, force_refresh: bool) -> Result<Paged<TvSummary>> {
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(path, &params, force_refresh)
            .await?;
        decode(path, value)
    }

    pub async fn popular(&self, page: u32, force_refresh: bool) -> Result<Paged<TvSummary>> {
        self.feed("/tv/popular", page, force_refresh).await
    }

    pub async fn top_rated(&self, page: u32, force_refresh: bool) -> Result<Paged<TvSummary>> {
        self.feed("/tv/top_rated", page, force_refresh).await
    }

    pub async fn on_the_air(&self, page: u32, force_refresh: bool) -> Result<Paged<TvSummary>> {
        self.feed("/tv/on_the_air", page, force_refresh).await
    }

    pub async fn airing_today(&self, page: u32, force_refresh: bool) -> Result<Paged<TvSummary>> {
        self.feed("/tv/airing_today", page, force_refresh).await
    }

    pub async fn detail(&self, id: u64, force_refresh: bool) -> Result<TvDetail> {
        let path = format!("/tv/{id}");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), force_refresh)
            .await?;
        decode(&path, value)
    }

    pub async fn credits(&self, id: u64) -> Result<Credits> {
        let path = format!("/tv/{id}/credits");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn images(&self, id: u64) -> Result<ImageCollection> {
        let path = format!("/tv/{id}/images");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn videos(&self, id: u64) -> Result<VideoCollection> {
        let path = format!("/tv/{id}/videos");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn reviews(&self, id: u64, page: u32) -> Result<Paged<Review>> {
        let path = format!("/tv/{id}/reviews");
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(&path, &params, false)
            .await?;
        decode(&path, value)
    }

    pub async fn similar(&self, id: u64, page: u32) -> Result<Paged<TvSummary>> {
        self.feed(&format!("/tv/{id}/similar"), page, false).await
    }

    pub async fn recommendations(&self, id: u64, page: u32) -> Result<Paged<TvSummary>> {
        self.feed(&format!("/tv/{id}/recommendations"), page, false)
            .await
    }

    /// Submit a rating. Writes bypass the cache and the coordinator.
    pub async fn rate(&self, id: u64, score: f64) -> Result<()> {
        let path = format!("/tv/{id}/rating");
        self.remote
            .post(&path, &RequestParams::new(), json!({ "value": score }))
            .await?;
        Ok(())
    }
}
