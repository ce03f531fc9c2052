//! Trending endpoints

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{MediaType, MultiResult, Paged, TimeWindow};
use crate::params::RequestParams;
use std::sync::Arc;

/// Trending API group
pub struct TrendingApi {
    coordinator: Arc<RequestCoordinator>,
}

impl TrendingApi {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Trending titles for `media` over `window`
    pub async fn list(
        &self,
        media: MediaType,
        window: TimeWindow,
        page: u32,
    ) -> Result<Paged<MultiResult>> {
        let path = format!("/trending/{media}/{window}");
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(&path, &params, false)
            .await?;
        decode(&path, value)
    }
}
