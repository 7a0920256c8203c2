//! Storage backends for localaccount
//!
//! This module provides the [`Storage`] trait, the string key-value port that
//! [`UserStore`](crate::user::UserStore) and [`SessionManager`](crate::user::SessionManager)
//! persist through, and its implementations:
//!
//! * [`InMemory`]: a `HashMap` behind a lock, with whole-map JSON save/load.
//! * [`JsonFile`]: a write-through JSON file; every write hits disk before returning.
//!
//! Backends store opaque strings. Encoding and decoding of records happens one layer up in
//! [`codec`](crate::codec), so a backend never sees a malformed record, only a string.

mod errors;
mod file;
mod in_memory;

pub use errors::StorageError;
pub use file::JsonFile;
pub use in_memory::InMemory;

use crate::Result;

/// Synchronous string-keyed persistent key-value store.
///
/// All implementations must be `Send` and `Sync` so a single store can be shared
/// behind an `Arc` by both the user store and the session manager.
///
/// There is no compare-and-swap: callers doing read-modify-write cycles from two
/// processes against the same backing store can lose updates.
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
