//! Current-session tracking.

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::SessionRecord;
use crate::{
    Clock, Result,
    backend::Storage,
    codec::{decode, encode},
    constants::SESSION_KEY,
};

/// Tracks at most one active session under [`SESSION_KEY`].
///
/// The session names a nickname but is never checked against the user store here. A
/// session whose nickname no longer resolves is "dangling"; callers treat it as no session
/// and call [`end`](Self::end).
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl SessionManager {
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Start a session for `nickname`, replacing any existing one.
    pub fn start(&self, nickname: &str) -> Result<SessionRecord> {
        let session = SessionRecord {
            nick: nickname.to_string(),
            at: self.clock.now_millis(),
        };
        self.storage.set(SESSION_KEY, &encode(&session)?)?;
        debug!(nick = nickname, at = session.at, "session started");
        Ok(session)
    }

    /// The stored session, if any.
    ///
    /// Malformed stored content reads as no session.
    pub fn current(&self) -> Result<Option<SessionRecord>> {
        let raw = self.storage.get(SESSION_KEY)?;
        match decode::<SessionRecord>(SESSION_KEY, raw.as_deref()) {
            Ok(session) => Ok(session),
            Err(err) => {
                warn!(error = %err.source, "ignoring malformed session");
                Ok(None)
            }
        }
    }

    /// Remove the session key entirely.
    pub fn end(&self) -> Result<()> {
        self.storage.remove(SESSION_KEY)?;
        debug!("session ended");
        Ok(())
    }
}
