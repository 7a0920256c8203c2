//! Core data types for the user system

use serde::{Deserialize, Deserializer, Serialize};

/// A persisted account entry, keyed by nickname.
///
/// Stored as one element of the JSON array under
/// [`USERS_KEY`](crate::constants::USERS_KEY). Field names on disk are camelCase.
///
/// The password is stored verbatim. This record is not a credential store.
///
/// Decoding is lenient: a missing or `null` field takes its default, so a partial entry
/// written by another client still loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique nickname (login identifier)
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,

    /// Password, unhashed
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,

    /// Free-form gender value
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,

    /// Date of birth as `YYYY-MM-DD`; any part may be empty (see [`dob`](super::dob))
    #[serde(default, deserialize_with = "null_as_default")]
    pub dob: String,

    /// Free-text status line
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Creation time, milliseconds since Unix epoch. `0` when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserRecord {
    /// Apply `patch` field by field. `None` fields are left untouched.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(password) = &patch.password {
            self.password.clone_from(password);
        }
        if let Some(gender) = &patch.gender {
            self.gender.clone_from(gender);
        }
        if let Some(dob) = &patch.dob {
            self.dob.clone_from(dob);
        }
        if let Some(status) = &patch.status {
            self.status.clone_from(status);
        }
    }
}

/// Partial update for a [`UserRecord`].
///
/// The nickname and creation time are not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub password: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub status: Option<String>,
}

impl UserPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.password.is_none()
            && self.gender.is_none()
            && self.dob.is_none()
            && self.status.is_none()
    }
}

/// The single active session, persisted under [`SESSION_KEY`](crate::constants::SESSION_KEY).
///
/// `nick` is a weak reference: nothing guarantees a matching [`UserRecord`] exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Logged-in nickname
    pub nick: String,

    /// Login time, milliseconds since Unix epoch
    pub at: u64,
}
