//! People endpoints

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{Credits, ImageCollection, Paged, PersonDetail, PersonSummary};
use crate::params::RequestParams;
use std::sync::Arc;

/// People API group
pub struct PeopleApi {
    coordinator: Arc<RequestCoordinator>,
}

impl PeopleApi {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self { coordinator }
    }

    pub async fn popular(&self, page: u32, force_refresh: bool) -> Result<Paged<PersonSummary>> {
        let path = "/person/popular";
        let params = RequestParams::new().with_page(page.max(1));
        let value = self
            .coordinator
            .fetch_with_cache(path, &params, force_refresh)
            .await?;
        decode(path, value)
    }

    pub async fn detail(&self, id: u64, force_refresh: bool) -> Result<PersonDetail> {
        let path = format!("/person/{id}");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), force_refresh)
            .await?;
        decode(&path, value)
    }

    /// Movie appearances for a person, in the credits shape
    pub async fn movie_credits(&self, id: u64) -> Result<Credits> {
        let path = format!("/person/{id}/movie_credits");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }

    pub async fn images(&self, id: u64) -> Result<ImageCollection> {
        let path = format!("/person/{id}/images");
        let value = self
            .coordinator
            .fetch_with_cache(&path, &RequestParams::new(), false)
            .await?;
        decode(&path, value)
    }
}
