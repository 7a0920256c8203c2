//! Data written through a JsonFile survives reopening the file.

use std::sync::Arc;

use localaccount::{
    Accounts,
    backend::{InMemory, JsonFile, Storage},
    constants::{SESSION_KEY, USERS_KEY},
};

use crate::helpers::{file_storage, register};

#[test]
fn test_accounts_survive_reopen() {
    let (storage, dir) = file_storage();
    let path = storage.path().to_path_buf();

    {
        let accounts = Accounts::open(storage);
        register(&accounts, "bob", "pw1");
        accounts.login("bob", "pw1").unwrap();
    }

    let reopened = Accounts::open(Arc::new(JsonFile::open(&path)));
    assert_eq!(reopened.user_count().unwrap(), 1);
    assert_eq!(reopened.current_user().unwrap().nickname, "bob");
    drop(dir);
}

#[test]
fn test_file_layout_uses_fixed_keys() {
    let (storage, _dir) = file_storage();
    let accounts = Accounts::open(storage.clone());
    register(&accounts, "bob", "pw1");
    accounts.login("bob", "pw1").unwrap();

    let json = std::fs::read_to_string(storage.path()).unwrap();
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&json).unwrap();
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec![SESSION_KEY, USERS_KEY]);

    // Values are JSON documents stored as strings
    let users: serde_json::Value = serde_json::from_str(map[USERS_KEY].as_str().unwrap()).unwrap();
    assert_eq!(users[0]["nickname"], "bob");
    assert!(users[0]["createdAt"].is_u64());
}

#[test]
fn test_in_memory_snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let storage = Arc::new(InMemory::new());
    let accounts = Accounts::open(storage.clone());
    register(&accounts, "carol", "pw");
    storage.save_to_file(&path).unwrap();

    let restored = Accounts::open(Arc::new(InMemory::load_from_file(&path).unwrap()));
    let carol = restored.users().find_by_nickname("carol").unwrap().unwrap();
    assert_eq!(carol.password, "pw");
}

#[test]
fn test_corrupted_users_value_in_file_reads_empty() {
    let (storage, _dir) = file_storage();
    storage.set(USERS_KEY, "garbage").unwrap();

    let accounts = Accounts::open(storage);
    assert_eq!(accounts.user_count().unwrap(), 0);
    register(&accounts, "dave", "pw");
    assert_eq!(accounts.user_count().unwrap(), 1);
}
