//! Genre list endpoints

use crate::api::decode;
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::models::{Genre, GenreList};
use crate::params::RequestParams;
use std::sync::Arc;

/// Genre API group
pub struct GenresApi {
    coordinator: Arc<RequestCoordinator>,
}

impl GenresApi {
    pub fn new(coordinator: Arc<RequestCoordinator>) -> Self {
        Self { coordinator }
    }

    async fn list(&self, path: &str) -> Result<Vec<Genre>> {
        let value = self
            .coordinator
            .fetch_with_cache(path, &RequestParams::new(), false)
            .await?;
        let list: GenreList = decode(path, value)?;
        Ok(list.genres)
    }

    pub async fn movie(&self) -> Result<Vec<Genre>> {
        self.list("/genre/movie/list").await
    }

    pub async fn tv(&self) -> Result<Vec<Genre>> {
        self.list("/genre/tv/list").await
    }
}
