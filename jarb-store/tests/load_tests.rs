mod common;

use common::{hero_payload, init_tracing, StubFetcher};
use jarb_store::{ConstraintsStore, StoreError};
use jarb_types::ConstraintMap;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn load_stores_constraints_and_returns_transport_result() {
    init_tracing();
    let store = ConstraintsStore::new(StubFetcher::answering(hero_payload()));

    let response = store.load_constraints("/constraints").await.unwrap();

    assert_eq!(response.url, "/constraints");
    assert_eq!(response.status, 200);
    assert_eq!(response.data, hero_payload());
    assert_eq!(
        *store.get_constraints().unwrap(),
        ConstraintMap::from_value(hero_payload()).unwrap()
    );
}

#[tokio::test]
async fn observers_have_run_when_load_completes() {
    let store = ConstraintsStore::new(StubFetcher::answering(hero_payload()));
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.on_constraints_changed(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.load_constraints("/constraints").await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_load_keeps_previous_snapshot() {
    init_tracing();
    let store = ConstraintsStore::new(StubFetcher::failing("connection refused"));
    let previous = ConstraintMap::from_value(hero_payload()).unwrap();
    store.set_constraints(previous.clone());

    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.on_constraints_changed(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = store.load_constraints("/constraints").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(*store.get_constraints().unwrap(), previous);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_first_load_leaves_store_empty() {
    let store = ConstraintsStore::new(StubFetcher::failing("timeout"));
    assert!(store.load_constraints("/constraints").await.is_err());
    assert!(store.get_constraints().is_none());
}

#[tokio::test]
async fn malformed_payload_is_rejected_before_storing() {
    let store = ConstraintsStore::new(StubFetcher::answering(json!({ "Hero": ["name"] })));

    let err = store.load_constraints("/constraints").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidPayload(_)));
    assert!(!err.is_transport());
    assert!(store.get_constraints().is_none());
}

#[tokio::test]
async fn later_load_wins() {
    let fetcher = Arc::new(StubFetcher::answering(json!({ "Villain": {} })));
    let store = ConstraintsStore::with_fetcher(fetcher.clone());
    store.set_constraints(ConstraintMap::from_value(hero_payload()).unwrap());

    store.load_constraints("/first").await.unwrap();
    store.load_constraints("/second").await.unwrap();

    let current = store.get_constraints().unwrap();
    assert!(current.entity("Villain").is_some());
    assert!(current.entity("Hero").is_none());
    assert_eq!(*fetcher.requested.lock().unwrap(), vec!["/first", "/second"]);
}
