//! Durable user collection.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::types::{UserPatch, UserRecord};
use crate::{
    Result,
    backend::Storage,
    codec::{decode_or_default, encode},
    constants::USERS_KEY,
};

/// CRUD over the user collection stored under [`USERS_KEY`].
///
/// There is no in-memory cache: every read goes to storage and every mutation is a full
/// read-modify-write of the whole collection. Two writers racing on the same backing store
/// can lose an update; the last full write wins.
///
/// Only content that is not a JSON array counts as malformed. Elements are decoded one by
/// one, and [`create`](Self::create) and [`update`](Self::update) write back every other
/// element as it was stored, including ones that do not decode and fields this crate does
/// not know about.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn Storage>,
}

impl UserStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn load_raw(&self) -> Result<Vec<Value>> {
        let raw = self.storage.get(USERS_KEY)?;
        Ok(decode_or_default(USERS_KEY, raw.as_deref()))
    }

    fn save_raw(&self, elements: &[Value]) -> Result<()> {
        self.storage.set(USERS_KEY, &encode(elements)?)?;
        debug!(count = elements.len(), "saved user collection");
        Ok(())
    }

    /// Load the full collection.
    ///
    /// Missing or malformed stored content yields an empty collection. Elements that do not
    /// decode as a [`UserRecord`] are skipped.
    pub fn load_all(&self) -> Result<Vec<UserRecord>> {
        Ok(self
            .load_raw()?
            .iter()
            .enumerate()
            .filter_map(|(index, element)| match UserRecord::deserialize(element) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(index, %error, "skipping undecodable user record");
                    None
                }
            })
            .collect())
    }

    /// Overwrite the full collection.
    pub fn save_all(&self, records: &[UserRecord]) -> Result<()> {
        let json = encode(records)?;
        self.storage.set(USERS_KEY, &json)?;
        debug!(count = records.len(), "saved user collection");
        Ok(())
    }

    /// First record whose nickname equals `nick` exactly (case-sensitive).
    pub fn find_by_nickname(&self, nick: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|record| record.nickname == nick))
    }

    /// Append `record` to the collection.
    ///
    /// Uniqueness is not checked here; callers check with
    /// [`find_by_nickname`](Self::find_by_nickname) first.
    pub fn create(&self, record: UserRecord) -> Result<()> {
        let mut elements = self.load_raw()?;
        debug!(nickname = %record.nickname, "creating user record");
        elements.push(serde_json::to_value(record)?);
        self.save_raw(&elements)
    }

    /// Merge `patch` over the record matching `nick`.
    ///
    /// Only the fields named by the patch are written; every other stored field of the
    /// element is kept.
    ///
    /// # Returns
    /// `false`, without writing anything, if no record matches.
    pub fn update(&self, nick: &str, patch: &UserPatch) -> Result<bool> {
        let mut elements = self.load_raw()?;
        let Some(fields) = elements
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|fields| fields.get("nickname").and_then(Value::as_str) == Some(nick))
        else {
            debug!(nickname = nick, "update target not found");
            return Ok(false);
        };
        merge_patch(fields, patch);
        self.save_raw(&elements)?;
        Ok(true)
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }
}

fn merge_patch(fields: &mut Map<String, Value>, patch: &UserPatch) {
    let named = [
        ("password", &patch.password),
        ("gender", &patch.gender),
        ("dob", &patch.dob),
        ("status", &patch.status),
    ];
    for (name, value) in named {
        if let Some(value) = value {
            fields.insert(name.to_string(), Value::String(value.clone()));
        }
    }
}
