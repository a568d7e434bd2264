//! Search log writes and popular searches.

use itinera::{PopularSearchesProvider, StoreError};

use super::common::{service, StubStore};

#[tokio::test]
async fn test_record_query_logs_location() {
    let (store, service) = service(StubStore::default());

    service.record_query("u1", "hiking in CO").await;
    service.record_query("u1", "Beach weekend in Miami, FL").await;
    service.record_query("u2", "museum hopping").await;

    let logged = store.logged();
    assert_eq!(logged.len(), 3);
    assert_eq!(logged[0].user_id, "u1");
    assert_eq!(logged[0].query, "hiking in CO");
    assert_eq!(logged[0].location.as_deref(), Some("Colorado"));
    assert_eq!(
        logged[1].location.as_deref(),
        Some("Beach weekend in Miami, FL")
    );
    assert_eq!(logged[2].location, None);
}

#[tokio::test]
async fn test_blank_query_not_logged() {
    let (store, service) = service(StubStore::default());
    service.record_query("u1", "   ").await;
    assert_eq!(store.log_calls(), 0);
}

#[tokio::test]
async fn test_log_failure_is_swallowed() {
    let (store, service) =
        service(StubStore::default().failing_log(StoreError::Unavailable("down".into())));

    service.record_query("u1", "beach").await;
    assert_eq!(store.log_calls(), 1);
    assert!(store.logged().is_empty());
}

#[tokio::test]
async fn test_detached_write_completes() {
    let (store, service) = service(StubStore::default());

    let handle = service.record_query_detached("u1", "Lake Tahoe trip");
    handle.await.expect("log task panicked");

    let logged = store.logged();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].location.as_deref(), Some("lake"));
}

#[tokio::test]
async fn test_detached_blank_query_is_noop() {
    let (store, service) = service(StubStore::default());
    service
        .record_query_detached("u1", "")
        .await
        .expect("log task panicked");
    assert_eq!(store.log_calls(), 0);
}

#[test]
fn test_popular_searches_default_limit() {
    let (_, service) = service(StubStore::default());

    let popular = service.popular_searches(None);
    assert_eq!(popular.len(), 10);
    assert_eq!(popular[0], "Beach vacation");

    assert_eq!(service.popular_searches(Some(3)).len(), 3);
    assert!(service.popular_searches(Some(0)).is_empty());
}

struct Trending;

impl PopularSearchesProvider for Trending {
    fn popular_searches(&self) -> Vec<String> {
        vec!["Northern lights".to_string(), "Cherry blossoms".to_string()]
    }
}

#[test]
fn test_popular_provider_is_injectable() {
    let (store, service) = service(StubStore::default());
    let service = service.with_popular(Trending);

    assert_eq!(
        service.popular_searches(None),
        vec!["Northern lights", "Cherry blossoms"]
    );
    assert_eq!(store.total_calls(), 0);
}
