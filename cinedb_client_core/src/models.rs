//! Typed response models for the media metadata API
//!
//! Fields the remote API omits or nulls out are `Option` or defaulted, so a
//! sparse record never fails decoding. Shape mismatches (a list endpoint
//! returning a non-list, say) surface as `Error::InvalidResponse` via the
//! `decode` helper in the API layer.

use crate::error::{Error, Result};
use crate::images::{image_url, BackdropSize, PosterSize, ProfileSize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of a paginated response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Paged<T> {
    /// Reject a well-formed page that carries zero results
    pub fn require_results(self, endpoint: &str) -> Result<Self> {
        if self.results.is_empty() {
            return Err(Error::empty_result(endpoint));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Wrapper shape of `/genre/{media}/list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub vote_average: f64,
}

/// Shape of `/{media}/{id}/images`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageCollection {
    #[serde(default)]
    pub backdrops: Vec<ImageRecord>,
    #[serde(default)]
    pub posters: Vec<ImageRecord>,
    #[serde(default)]
    pub profiles: Vec<ImageRecord>,
}

impl ImageCollection {
    /// Poster URLs at `size`, skipping records without a usable path
    pub fn poster_urls(&self, image_base: &str, size: PosterSize) -> Result<Vec<String>> {
        Self::usable_urls(image_base, size.as_str(), &self.posters, "posters")
    }

    /// Backdrop URLs at `size`, skipping records without a usable path
    pub fn backdrop_urls(&self, image_base: &str, size: BackdropSize) -> Result<Vec<String>> {
        Self::usable_urls(image_base, size.as_str(), &self.backdrops, "backdrops")
    }

    /// Profile URLs at `size`, skipping records without a usable path
    pub fn profile_urls(&self, image_base: &str, size: ProfileSize) -> Result<Vec<String>> {
        Self::usable_urls(image_base, size.as_str(), &self.profiles, "profiles")
    }

    fn usable_urls(
        image_base: &str,
        size: &str,
        records: &[ImageRecord],
        kind: &str,
    ) -> Result<Vec<String>> {
        let urls: Vec<String> = records
            .iter()
            .filter_map(|record| image_url(image_base, size, record.file_path.as_deref()))
            .collect();
        if urls.is_empty() {
            return Err(Error::empty_result(kind));
        }
        Ok(urls)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Shape of `/{media}/{id}/videos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VideoCollection {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Heterogeneous entry from `/search/multi` and `/trending/*`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiResult {
    pub id: u64,
    #[serde(default)]
    pub media_type: Option<String>,
    /// Movie entries carry a title
    #[serde(default)]
    pub title: Option<String>,
    /// TV and person entries carry a name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl MultiResult {
    /// Display label independent of the entry's media type
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }
}

/// Compact `{id, name}` entry from company/keyword/collection search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Media kind selector for trending and multi-media endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
    Person,
    All,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::All => "all",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trending window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
