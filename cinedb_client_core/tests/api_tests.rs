//! Integration tests for the typed API capability modules

use cinedb_client_core::clock::Clock;
use cinedb_client_core::config::ClientConfig;
use cinedb_client_core::error::Error;
use cinedb_client_core::images::PosterSize;
use cinedb_client_core::models::{MediaType, TimeWindow};
use cinedb_client_core::CatalogClient;
use cinedb_test_utils::{payloads, ManualClock, MockRemote};
use serde_json::json;
use std::sync::Arc;

fn setup() -> (Arc<MockRemote>, CatalogClient) {
    let remote = Arc::new(MockRemote::new());
    let clock = Arc::new(ManualClock::new()) as Arc<dyn Clock>;
    let client = CatalogClient::with_parts(
        remote.clone(),
        clock,
        ClientConfig::with_api_key("test-key"),
    );
    (remote, client)
}

#[tokio::test]
async fn test_popular_movies_decode_into_models() {
    let (remote, client) = setup();
    remote.set_response(
        "/movie/popular",
        payloads::paged_movies(1, 5, &[(1, "Parasite"), (2, "Oldboy")]),
    );

    let page = client.movies().popular(1, false).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.results[0].title, "Parasite");
    assert_eq!(page.results[1].id, 2);
}

#[tokio::test]
async fn test_detail_round_trip_is_cached() {
    let (remote, client) = setup();
    remote.set_response("/movie/7", payloads::movie_detail(7, "Decision to Leave"));

    let first = client.movies().detail(7, false).await.unwrap();
    let second = client.movies().detail(7, false).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.runtime, Some(121));
    assert_eq!(remote.call_count("/movie/7"), 1);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let (remote, client) = setup();
    remote.set_response("/genre/movie/list", json!([1, 2, 3]));

    let result = client.genres().movie().await;
    assert!(matches!(result, Err(Error::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_genre_list_unwraps() {
    let (remote, client) = setup();
    remote.set_response("/genre/movie/list", payloads::genre_list());

    let genres = client.genres().movie().await.unwrap();
    assert_eq!(genres.len(), 3);
    assert_eq!(genres[0].name, "Drama");
}

#[tokio::test]
async fn test_rating_posts_and_bypasses_the_cache() {
    let (remote, client) = setup();
    remote.set_response("/movie/7/rating", json!({"success": true, "status_code": 1}));

    client.movies().rate(7, 8.5).await.unwrap();
    client.movies().rate(7, 9.0).await.unwrap();

    let calls = remote.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.method == "POST"));
    assert_eq!(client.cache_stats().await.entry_count, 0);
}

#[tokio::test]
async fn test_image_urls_derive_and_filter() {
    let (remote, client) = setup();
    remote.set_response(
        "/movie/7/images",
        payloads::image_collection(&["/bd.jpg"], &["/p1.jpg", "/p2.jpg"]),
    );

    let images = client.movies().images(7).await.unwrap();
    let urls = images
        .poster_urls(client.image_base(), PosterSize::W500)
        .unwrap();
    assert_eq!(
        urls,
        vec![
            "https://image.tmdb.org/t/p/w500/p1.jpg",
            "https://image.tmdb.org/t/p/w500/p2.jpg"
        ]
    );
}

#[tokio::test]
async fn test_images_without_usable_paths_are_empty_result() {
    let (remote, client) = setup();
    remote.set_response("/movie/7/images", payloads::image_collection(&[], &[]));

    let images = client.movies().images(7).await.unwrap();
    let result = images.poster_urls(client.image_base(), PosterSize::W342);
    assert!(matches!(result, Err(Error::EmptyResult { .. })));
}

#[tokio::test]
async fn test_trending_path_shape() {
    let (remote, client) = setup();
    remote.set_response(
        "/trending/movie/week",
        json!({
            "page": 1,
            "results": [{"id": 11, "title": "Burning", "media_type": "movie"}],
            "total_pages": 1,
            "total_results": 1
        }),
    );

    let page = client
        .trending()
        .list(MediaType::Movie, TimeWindow::Week, 1)
        .await
        .unwrap();
    assert_eq!(page.results[0].label(), "Burning");
}

#[tokio::test]
async fn test_zero_hit_search_is_empty_result() {
    let (remote, client) = setup();
    remote.set_response(
        "/search/movie",
        json!({
            "page": 1,
            "results": [],
            "total_pages": 0,
            "total_results": 0
        }),
    );

    let result = client.search().movies("zzzzzz", 1).await;
    assert!(matches!(result, Err(Error::EmptyResult { .. })));
}

#[tokio::test]
async fn test_search_multi_mixes_media() {
    let (remote, client) = setup();
    remote.set_response(
        "/search/multi",
        json!({
            "page": 1,
            "results": [
                {"id": 1, "title": "Parasite", "media_type": "movie"},
                {"id": 2, "name": "Bong Joon-ho", "media_type": "person"}
            ],
            "total_pages": 1,
            "total_results": 2
        }),
    );

    let page = client.search().multi("parasite", 1).await.unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].label(), "Bong Joon-ho");
}
