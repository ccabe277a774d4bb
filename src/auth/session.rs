//! The client's record of who is signed in.
//!
//! `SessionManager` is the only writer of the session. Both fields are
//! replaced or cleared together in a single write under the lock so no
//! reader ever observes a token without a user or the reverse. Every
//! mutation is written through to the key-value store under
//! [`SESSION_KEY`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, SESSION_KEY};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub role: String,
    // `None` means no daily limit
    #[serde(default)]
    pub daily_limit: Option<u32>,
}

impl User {
    pub fn new(username: &str, role: &str, daily_limit: Option<u32>) -> Self {
        Self {
            username: username.to_string(),
            role: role.to_string(),
            daily_limit,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    token: Option<String>,
}

impl Session {
    pub fn authenticated(token: &str, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    // A blob written by something else may hold only one of the two
    // fields. Treat that as signed out.
    fn normalized(self) -> Self {
        if self.is_authenticated() {
            self
        } else {
            Self::empty()
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    state: Arc<RwLock<Session>>,
    store: Arc<dyn KeyValueStore>,
    // Set while the stored blob lags behind memory
    unsynced: Arc<AtomicBool>,
}

impl SessionManager {
    /// Rehydrate the session from `store`. An unreadable blob starts
    /// an empty session rather than failing startup.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let session = match storage::load::<Session>(store.as_ref(), SESSION_KEY) {
            Ok(Some(session)) => session.normalized(),
            Ok(None) => Session::empty(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable persisted session: {}", e);
                Session::empty()
            }
        };
        tracing::debug!(
            "Session loaded (authenticated: {})",
            session.is_authenticated()
        );

        Self {
            state: Arc::new(RwLock::new(session)),
            store,
            unsynced: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.read().user().cloned()
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Replace the whole session after a successful login.
    pub fn set_auth(&self, token: &str, user: User) {
        tracing::info!("Signed in as {} ({})", user.username, user.role);
        self.replace(Session::authenticated(token, user));
    }

    /// Clear the whole session. Used for explicit sign out and when the
    /// backend rejects our credential.
    pub fn logout(&self) {
        tracing::info!("Signed out");
        self.replace(Session::empty());
    }

    fn replace(&self, next: Session) {
        let mut state = self.write();
        // Persist while holding the lock so memory and storage change
        // in the same order across threads
        match storage::save(self.store.as_ref(), SESSION_KEY, &next) {
            Ok(()) => self.unsynced.store(false, Ordering::SeqCst),
            Err(e) => {
                tracing::error!("Failed to persist session: {}", e);
                // Never leave an older credential behind on disk
                if let Err(e) = self.store.remove(SESSION_KEY) {
                    tracing::error!("Failed to remove stale session: {}", e);
                }
                self.unsynced.store(true, Ordering::SeqCst);
            }
        }
        *state = next;
    }

    /// The bearer token as found in the persisted session. Falls back
    /// to the in-memory session when the blob can't be read or the last
    /// write to it failed.
    pub fn persisted_token(&self) -> Option<String> {
        if self.unsynced.load(Ordering::SeqCst) {
            return self.token();
        }
        match storage::load::<Session>(self.store.as_ref(), SESSION_KEY) {
            Ok(Some(session)) => session.token,
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to parse auth data: {}", e);
                self.token()
            }
        }
    }
}
