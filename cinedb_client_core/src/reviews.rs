//! Review feed: incremental "load more" over movie reviews
//!
//! Service layer tying the request coordinator to the incremental merge
//! store. Pages are fetched with `force_refresh` set because accumulated
//! pages live here, not in the detail cache; de-duplication still applies,
//! so two rapid "load more" clicks for the same page collapse into one
//! network call.

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{Paged, Review};
use crate::paged::{PagedResource, PagedStore};
use crate::params::RequestParams;
use std::sync::Arc;

/// Incrementally loaded review pages for movies
pub struct ReviewFeed {
    coordinator: Arc<RequestCoordinator>,
    store: PagedStore<Review>,
}

impl ReviewFeed {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self {
            coordinator,
            store: PagedStore::new(),
        }
    }

    fn parent_key(movie_id: u64) -> String {
        format!("movie:{movie_id}:reviews")
    }

    /// Load page 1 from scratch, dropping anything previously accumulated
    pub async fn load_first(&self, movie_id: u64) -> Result<PagedResource<Review>> {
        self.store.reset(&Self::parent_key(movie_id)).await;
        self.load_page(movie_id, 1).await
    }

    /// Load the next sequential page and merge it
    ///
    /// When nothing is loaded yet this behaves like `load_first`. When all
    /// pages are already merged the current state is returned unchanged,
    /// with no network call.
    pub async fn load_more(&self, movie_id: u64) -> Result<PagedResource<Review>> {
        let key = Self::parent_key(movie_id);
        match self.store.get(&key).await {
            None => self.load_page(movie_id, 1).await,
            Some(resource) if !resource.has_more() => Ok(resource),
            Some(resource) => self.load_page(movie_id, resource.current_page + 1).await,
        }
    }

    async fn load_page(&self, movie_id: u64, page: u32) -> Result<PagedResource<Review>> {
        let path = format!("/movie/{movie_id}/reviews");
        let params = RequestParams::new().with_page(page);
        let value = self
            .coordinator
            .fetch_with_cache(&path, &params, true)
            .await?;
        let paged: Paged<Review> = decode(&path, value)?;
        Ok(self
            .store
            .merge_page(
                &Self::parent_key(movie_id),
                paged.page,
                paged.results,
                paged.total_pages,
            )
            .await)
    }

    /// Whether more review pages remain for this movie
    pub async fn has_more(&self, movie_id: u64) -> bool {
        self.store.has_more(&Self::parent_key(movie_id)).await
    }

    /// Currently accumulated state, if any pages have loaded
    pub async fn current(&self, movie_id: u64) -> Option<PagedResource<Review>> {
        self.store.get(&Self::parent_key(movie_id)).await
    }

    /// Drop accumulated reviews for this movie
    pub async fn reset(&self, movie_id: u64) {
        self.store.reset(&Self::parent_key(movie_id)).await;
    }
}
