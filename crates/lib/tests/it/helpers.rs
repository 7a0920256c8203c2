#![allow(dead_code)]

use std::sync::Arc;

use localaccount::{
    Accounts, FixedClock,
    accounts::NewUser,
    backend::{InMemory, JsonFile, Storage},
};
use tempfile::TempDir;

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates a test backend based on the TEST_BACKEND env var.
///
/// Supported values:
/// - "inmemory" or unset: InMemory backend (default)
/// - "file": JsonFile backend in a fresh temp dir
///
/// The returned `TempDir` (if any) must be kept alive for the duration of the test.
pub fn test_storage() -> (Arc<dyn Storage>, Option<TempDir>) {
    match std::env::var("TEST_BACKEND").as_deref() {
        Ok("file") => {
            let (storage, dir) = file_storage();
            let storage: Arc<dyn Storage> = storage;
            (storage, Some(dir))
        }
        _ => {
            let storage: Arc<dyn Storage> = Arc::new(InMemory::new());
            (storage, None)
        }
    }
}

/// A JsonFile backend in a fresh temp dir.
pub fn file_storage() -> (Arc<JsonFile>, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let storage = Arc::new(JsonFile::open(dir.path().join("localaccount.json")));
    (storage, dir)
}

/// Accounts over `storage` with a [`FixedClock`] starting at 2024-01-01.
pub fn setup_accounts(storage: Arc<dyn Storage>) -> (Accounts, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let accounts = Accounts::with_clock(storage, clock.clone());
    (accounts, clock)
}

pub fn new_user(nickname: &str, password: &str) -> NewUser {
    NewUser {
        nickname: nickname.to_string(),
        password: password.to_string(),
        ..Default::default()
    }
}

/// Register a user, panicking on failure.
pub fn register(accounts: &Accounts, nickname: &str, password: &str) {
    accounts
        .register(new_user(nickname, password))
        .expect("Failed to register user");
}
