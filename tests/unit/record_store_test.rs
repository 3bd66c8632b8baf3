//! Unit tests for the RecordStore public API.
//!
//! Exercises the store lifecycle and every CRUD operation against both in-memory and
//! on-disk SQLite databases.

use rstest::rstest;
use tempfile::TempDir;

use smartweb::managers::record_store::{RecordStore, RecordStoreTrait, StoreLocation};
use smartweb::types::bookmark::{Bookmark, UpsertOutcome};
use smartweb::types::errors::StoreError;

fn open_store() -> RecordStore {
    let mut store = RecordStore::in_memory();
    store.initialize().expect("initialize in-memory store");
    store
}

fn seed(store: &mut RecordStore, records: &[(&str, &str, &str)]) {
    for (id, name, url) in records {
        store.upsert(&Bookmark::new(*id, *name, *url)).unwrap();
    }
}

// ─── Lifecycle ───

#[test]
fn test_new_store_is_not_initialized() {
    let store = RecordStore::at_path("/tmp/never-opened.db");
    assert!(!store.is_initialized());
    assert_eq!(
        store.location(),
        &StoreLocation::File("/tmp/never-opened.db".into())
    );
}

#[test]
fn test_operations_before_initialize_are_unavailable() {
    let mut store = RecordStore::in_memory();

    assert!(matches!(store.list_all(), Err(StoreError::StorageUnavailable(_))));
    assert!(matches!(store.get("a"), Err(StoreError::StorageUnavailable(_))));
    assert!(matches!(store.search("a"), Err(StoreError::StorageUnavailable(_))));
    assert!(matches!(
        store.upsert(&Bookmark::new("a", "A", "a.com")),
        Err(StoreError::StorageUnavailable(_))
    ));
    assert!(matches!(store.delete("a"), Err(StoreError::StorageUnavailable(_))));
    assert!(matches!(store.clear(), Err(StoreError::StorageUnavailable(_))));
}

#[test]
fn test_operations_after_shutdown_are_unavailable() {
    let mut store = open_store();
    store.shutdown();
    assert!(!store.is_initialized());
    assert!(matches!(store.list_all(), Err(StoreError::StorageUnavailable(_))));
}

#[test]
fn test_initialize_twice_keeps_data() {
    let mut store = open_store();
    seed(&mut store, &[("a", "A", "a.com")]);

    store.initialize().expect("second initialize should succeed");

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_initialize_fails_when_path_is_a_directory() {
    let dir = TempDir::new().unwrap();
    let mut store = RecordStore::at_path(dir.path());

    let result = store.initialize();

    assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
    assert!(!store.is_initialized());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("smartweb.db");

    {
        let mut store = RecordStore::at_path(&path);
        store.initialize().unwrap();
        seed(&mut store, &[("a", "Mail", "https://mail.example.com")]);
        store.shutdown();
    }

    let mut reopened = RecordStore::at_path(&path);
    reopened.initialize().unwrap();
    let all = reopened.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Mail");
    assert_eq!(all[0].url, "https://mail.example.com");
}

// ─── Reads ───

#[test]
fn test_list_all_empty() {
    let store = open_store();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_get_existing_and_missing() {
    let mut store = open_store();
    seed(&mut store, &[("a", "A", "a.com")]);

    let found = store.get("a").unwrap().expect("record a should exist");
    assert_eq!(found.name, "A");
    assert_eq!(found.url, "a.com");
    assert!(store.get("missing").unwrap().is_none());
}

#[rstest]
#[case("news", &["n1"])]
#[case("NEWS", &["n1"])]
#[case("example", &["n1", "m1"])]
#[case("mail.", &["m1"])]
#[case("nothing", &[])]
fn test_search_matches_name_or_url(#[case] query: &str, #[case] expected: &[&str]) {
    let mut store = open_store();
    seed(
        &mut store,
        &[
            ("n1", "News", "https://news.example.com"),
            ("m1", "Webmail", "https://mail.example.com"),
            ("c1", "Calendar", "https://cal.other.org"),
        ],
    );

    let mut ids: Vec<String> = store.search(query).unwrap().into_iter().map(|b| b.id).collect();
    ids.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(ids, expected, "query {:?}", query);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let mut store = open_store();
    seed(
        &mut store,
        &[("a", "50% off", "https://deals.example.com"), ("b", "500 offers", "https://x.com")],
    );

    let found = store.search("50%").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

// ─── Writes ───

#[test]
fn test_upsert_inserts_then_updates() {
    let mut store = open_store();

    let first = store.upsert(&Bookmark::new("a", "News", "news.example.com")).unwrap();
    let second = store
        .upsert(&Bookmark::new("a", "News2", "https://news.example.com"))
        .unwrap();

    assert_eq!(first, UpsertOutcome::Inserted);
    assert_eq!(second, UpsertOutcome::Updated);
    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1, "upsert on the same id must not duplicate rows");
    assert_eq!(all[0].name, "News2");
    assert_eq!(all[0].url, "https://news.example.com");
}

#[test]
fn test_upsert_stores_url_verbatim() {
    let mut store = open_store();
    store.upsert(&Bookmark::new("a", "Plain", "http://plain.example.com")).unwrap();

    let found = store.get("a").unwrap().unwrap();
    assert_eq!(found.url, "http://plain.example.com", "normalization is not applied on write");
}

#[test]
fn test_delete_removes_only_target() {
    let mut store = open_store();
    seed(&mut store, &[("a", "A", "a.com"), ("b", "B", "b.com")]);

    store.delete("a").unwrap();

    let ids: Vec<String> = store.list_all().unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["b".to_string()]);
}

#[test]
fn test_delete_missing_is_not_an_error() {
    let mut store = open_store();
    seed(&mut store, &[("a", "A", "a.com")]);

    store.delete("missing").expect("deleting a missing id must succeed");

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_clear_removes_everything() {
    let mut store = open_store();
    seed(&mut store, &[("a", "A", "a.com"), ("b", "B", "b.com")]);

    store.clear().unwrap();

    assert!(store.list_all().unwrap().is_empty());
}
