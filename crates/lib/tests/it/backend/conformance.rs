//! Behaviour every Storage implementation must share.

use std::sync::Arc;

use localaccount::backend::{InMemory, Storage};

use crate::helpers::file_storage;

fn check_get_set_remove(storage: &dyn Storage) {
    assert_eq!(storage.get("missing").unwrap(), None);

    storage.set("k", "one").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("one"));

    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));

    storage.set("other", "x").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
    assert_eq!(storage.get("other").unwrap().as_deref(), Some("x"));

    storage.remove("k").unwrap();
}

fn check_values_are_opaque(storage: &dyn Storage) {
    let raw = "not json, with \"quotes\" and\nnewlines";
    storage.set("raw", raw).unwrap();
    assert_eq!(storage.get("raw").unwrap().as_deref(), Some(raw));
}

#[test]
fn test_in_memory_conformance() {
    let storage = InMemory::new();
    check_get_set_remove(&storage);
    check_values_are_opaque(&storage);
}

#[test]
fn test_json_file_conformance() {
    let (storage, _dir) = file_storage();
    check_get_set_remove(storage.as_ref());
    check_values_are_opaque(storage.as_ref());
}

#[test]
fn test_shared_behind_arc() {
    let storage: Arc<dyn Storage> = Arc::new(InMemory::new());
    let other = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
}
