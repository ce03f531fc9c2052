//! cinedb client core library
//!
//! Data-fetching and caching orchestration for a movie catalog viewer
//! backed by a third-party media metadata API: a time-bounded in-memory
//! cache of detail records, request de-duplication across concurrent
//! callers, and a merge store for incrementally loaded pages. Presentation,
//! routing and the remote API itself are collaborators, not residents.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod images;
pub mod models;
pub mod paged;
pub mod params;
pub mod remote;
pub mod reviews;

// Re-export main types
pub use api::{
    CatalogClient, DiscoverApi, DiscoverFilter, GenresApi, MoviesApi, PeopleApi, SearchApi,
    TrendingApi, TvApi,
};
pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use clock::{Clock, SystemClock};
pub use config::{ClientConfig, DEFAULT_CACHE_TTL};
pub use coordinator::RequestCoordinator;
pub use error::{Error, Result};
pub use images::{image_url, BackdropSize, LogoSize, PosterSize, ProfileSize, StillSize};
pub use models::{MediaType, TimeWindow};
pub use paged::{PagedResource, PagedStore};
pub use params::RequestParams;
pub use remote::{RemoteClient, RemoteFetch};
pub use reviews::ReviewFeed;
