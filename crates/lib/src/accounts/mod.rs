//! Account flows
//!
//! [`Accounts`] is the caller-facing layer over [`UserStore`] and [`SessionManager`]:
//! registration with its uniqueness pre-check, password login, resolving and editing the
//! logged-in profile, and logout. Both stores share one injected [`Storage`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    Clock, Result, SystemClock,
    backend::Storage,
    user::{SessionManager, SessionRecord, UserError, UserPatch, UserRecord, UserStore},
};

/// Input for [`Accounts::register`].
#[derive(Clone, Debug, Default)]
pub struct NewUser {
    pub nickname: String,
    pub password: String,
    pub gender: String,
    /// Already composed, see [`dob::compose`](crate::user::dob::compose)
    pub dob: String,
    pub status: String,
}

/// Input for [`Accounts::update_profile`]. `None` fields keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub status: Option<String>,
}

impl From<ProfileUpdate> for UserPatch {
    fn from(update: ProfileUpdate) -> Self {
        UserPatch {
            password: None,
            gender: update.gender,
            dob: update.dob,
            status: update.status.map(|s| s.trim().to_string()),
        }
    }
}

/// Registration, login, profile and logout over a single storage backend.
#[derive(Clone)]
pub struct Accounts {
    users: UserStore,
    sessions: SessionManager,
    clock: Arc<dyn Clock>,
}

impl Accounts {
    /// Open the account flows over `storage`, stamping times from the system clock.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    /// Same as [`Accounts::open`] with an injected clock.
    pub fn with_clock(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: UserStore::new(storage.clone()),
            sessions: SessionManager::new(storage, clock.clone()),
            clock,
        }
    }

    /// The underlying user store.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// The underlying session manager.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// The clock used for `createdAt` and session times.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Register a new user.
    ///
    /// The nickname and status are trimmed. Fails with [`UserError::MissingCredentials`] if
    /// the nickname or password is empty and [`UserError::NicknameTaken`] if a record with
    /// that nickname already exists. The check and the write are not atomic.
    pub fn register(&self, new_user: NewUser) -> Result<UserRecord> {
        let nickname = new_user.nickname.trim();
        if nickname.is_empty() || new_user.password.is_empty() {
            return Err(UserError::MissingCredentials.into());
        }
        if self.users.find_by_nickname(nickname)?.is_some() {
            return Err(UserError::NicknameTaken {
                nickname: nickname.to_string(),
            }
            .into());
        }

        let record = UserRecord {
            nickname: nickname.to_string(),
            password: new_user.password,
            gender: new_user.gender,
            dob: new_user.dob,
            status: new_user.status.trim().to_string(),
            created_at: self.clock.now_millis(),
        };
        self.users.create(record.clone())?;
        info!(nickname = %record.nickname, "registered user");
        Ok(record)
    }

    /// Log in with a nickname and password.
    ///
    /// The nickname is trimmed. On a bad nickname or password the stored session is left
    /// exactly as it was. An empty password never matches, even against a stored record
    /// that has none.
    pub fn login(&self, nickname: &str, password: &str) -> Result<SessionRecord> {
        let nickname = nickname.trim();
        if password.is_empty() {
            return Err(UserError::InvalidCredentials.into());
        }
        match self.users.find_by_nickname(nickname)? {
            Some(user) if user.password == password => {
                let session = self.sessions.start(&user.nickname)?;
                info!(nickname, "logged in");
                Ok(session)
            }
            _ => Err(UserError::InvalidCredentials.into()),
        }
    }

    /// The user named by the current session.
    ///
    /// A dangling session (nickname no longer resolves) is cleared and reported as
    /// [`UserError::NotLoggedIn`], the same as no session at all.
    pub fn current_user(&self) -> Result<UserRecord> {
        let Some(session) = self.sessions.current()? else {
            return Err(UserError::NotLoggedIn.into());
        };
        match self.users.find_by_nickname(&session.nick)? {
            Some(user) => Ok(user),
            None => {
                warn!(nick = %session.nick, "clearing dangling session");
                self.sessions.end()?;
                Err(UserError::NotLoggedIn.into())
            }
        }
    }

    /// Edit the logged-in user's profile and return the updated record.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<UserRecord> {
        let user = self.current_user()?;
        let patch = UserPatch::from(update);
        if !self.users.update(&user.nickname, &patch)? {
            return Err(UserError::UserNotFound {
                nickname: user.nickname,
            }
            .into());
        }
        let mut updated = user;
        updated.apply(&patch);
        info!(nickname = %updated.nickname, "updated profile");
        Ok(updated)
    }

    /// End the current session, if any.
    pub fn logout(&self) -> Result<()> {
        self.sessions.end()?;
        info!("logged out");
        Ok(())
    }

    /// The raw current session, without checking that its nickname still resolves.
    pub fn whoami(&self) -> Result<Option<SessionRecord>> {
        self.sessions.current()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> Result<usize> {
        self.users.count()
    }
}
