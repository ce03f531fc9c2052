//! Integration tests for the request coordinator
//!
//! Driven entirely by the scriptable mock remote and a manually advanced
//! clock, so freshness and de-duplication behavior is deterministic.

use cinedb_client_core::cache::CacheStore;
use cinedb_client_core::clock::Clock;
use cinedb_client_core::coordinator::RequestCoordinator;
use cinedb_client_core::error::Error;
use cinedb_client_core::params::RequestParams;
use cinedb_test_utils::{payloads, ManualClock, MockRemote};
use std::sync::Arc;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(3600);
const POPULAR: &str = "/movie/popular";

fn setup() -> (Arc<MockRemote>, Arc<ManualClock>, Arc<RequestCoordinator>) {
    let remote = Arc::new(MockRemote::new());
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(CacheStore::new(clock.clone() as Arc<dyn Clock>));
    let coordinator = Arc::new(RequestCoordinator::new(remote.clone(), cache, TTL));
    (remote, clock, coordinator)
}

fn page_one() -> RequestParams {
    RequestParams::new().with_page(1)
}

#[tokio::test]
async fn test_fresh_cache_short_circuits_the_network() {
    let (remote, clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A"), (2, "B")]));

    let first = coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    let second = coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(remote.call_count(POPULAR), 1);

    // Past the TTL the entry is stale and a new fetch goes out.
    clock.advance(TTL + Duration::from_secs(1));
    let third = coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    assert_eq!(third, first);
    assert_eq!(remote.call_count(POPULAR), 2);
}

#[tokio::test]
async fn test_entry_fresh_just_under_the_ttl_boundary() {
    let (remote, clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    clock.advance(TTL - Duration::from_secs(1));
    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_network_call() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(50));

    let params = page_one();
    let (a, b, c) = tokio::join!(
        coordinator.fetch_with_cache(POPULAR, &params, false),
        coordinator.fetch_with_cache(POPULAR, &params, false),
        coordinator.fetch_with_cache(POPULAR, &params, false),
    );

    let a = a.unwrap();
    assert_eq!(a, b.unwrap());
    assert_eq!(a, c.unwrap());
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_many_concurrent_callers_still_one_call() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(30));

    let params = page_one();
    let fetches = (0..8).map(|_| coordinator.fetch_with_cache(POPULAR, &params, false));
    let results = futures::future::join_all(fetches).await;

    let first = results[0].as_ref().unwrap();
    for result in &results {
        assert_eq!(result.as_ref().unwrap(), first);
    }
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_error() {
    let (remote, _clock, coordinator) = setup();
    remote.set_error(POPULAR, Error::http(503, POPULAR));
    remote.set_delay(Duration::from_millis(50));

    let params = page_one();
    let (a, b) = tokio::join!(
        coordinator.fetch_with_cache(POPULAR, &params, false),
        coordinator.fetch_with_cache(POPULAR, &params, false),
    );

    assert_eq!(a.unwrap_err(), Error::http(503, POPULAR));
    assert_eq!(b.unwrap_err(), Error::http(503, POPULAR));
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_failure_preserves_the_cached_value() {
    let (remote, clock, coordinator) = setup();
    let good = payloads::paged_movies(1, 5, &[(1, "A")]);
    remote.enqueue(POPULAR, good.clone());
    remote.enqueue_error(POPULAR, Error::http(500, POPULAR));

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    clock.advance(TTL + Duration::from_secs(1));

    let failed = coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await;
    assert_eq!(failed.unwrap_err(), Error::http(500, POPULAR));

    // The stale last-known-good entry is untouched and retrievable.
    let key = page_one().cache_key(POPULAR);
    let entry = coordinator.cache().get(&key).await.unwrap();
    assert_eq!(entry.value, good);
}

#[tokio::test]
async fn test_forced_refresh_bypasses_freshness() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    coordinator
        .fetch_with_cache(POPULAR, &page_one(), true)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 2);
}

#[tokio::test]
async fn test_forced_refresh_still_deduplicates() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(50));

    let params = page_one();
    let (a, b) = tokio::join!(
        coordinator.fetch_with_cache(POPULAR, &params, true),
        coordinator.fetch_with_cache(POPULAR, &params, true),
    );
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_dropped_first_caller_does_not_strand_followers() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(200));

    let first = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .fetch_with_cache(POPULAR, &page_one(), false)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;

    let follower = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .fetch_with_cache(POPULAR, &page_one(), false)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;
    first.abort();

    // The follower still resolves with the shared result.
    let result = tokio::time::timeout(Duration::from_secs(1), follower)
        .await
        .expect("follower resolved after the first caller was dropped")
        .unwrap()
        .unwrap();
    assert_eq!(result, payloads::paged_movies(1, 5, &[(1, "A")]));
    assert_eq!(remote.call_count(POPULAR), 1);
    assert!(!coordinator.is_loading(POPULAR, &page_one()).await);
}

#[tokio::test]
async fn test_request_completes_after_every_caller_drops() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(50));

    let only = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .fetch_with_cache(POPULAR, &page_one(), false)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    only.abort();
    tokio::time::sleep(Duration::from_millis(100)).await;

    // The request settled on its own: entry released, value cached, and a
    // later fetch is served without another network call.
    assert!(!coordinator.is_loading(POPULAR, &page_one()).await);
    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 1);
}

#[tokio::test]
async fn test_distinct_keys_fetch_independently() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));

    let page_two = RequestParams::new().with_page(2);
    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    coordinator
        .fetch_with_cache(POPULAR, &page_two, false)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 2);
}

#[tokio::test]
async fn test_loading_state_tracks_the_in_flight_request() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_delay(Duration::from_millis(100));

    let task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .fetch_with_cache(POPULAR, &page_one(), false)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(coordinator.is_loading(POPULAR, &page_one()).await);

    task.await.unwrap().unwrap();
    assert!(!coordinator.is_loading(POPULAR, &page_one()).await);
}

#[tokio::test]
async fn test_evict_forces_a_refetch() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    coordinator.evict(POPULAR, &page_one()).await;
    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 2);
}

#[tokio::test]
async fn test_clear_cache_wipes_every_key() {
    let (remote, _clock, coordinator) = setup();
    remote.set_response(POPULAR, payloads::paged_movies(1, 5, &[(1, "A")]));
    remote.set_response("/movie/top_rated", payloads::paged_movies(1, 3, &[(2, "B")]));

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    coordinator
        .fetch_with_cache("/movie/top_rated", &page_one(), false)
        .await
        .unwrap();
    coordinator.clear_cache().await;

    coordinator
        .fetch_with_cache(POPULAR, &page_one(), false)
        .await
        .unwrap();
    coordinator
        .fetch_with_cache("/movie/top_rated", &page_one(), false)
        .await
        .unwrap();
    assert_eq!(remote.call_count(POPULAR), 2);
    assert_eq!(remote.call_count("/movie/top_rated"), 2);
}
