//! Sign in form.
//!
//! `Idle -> Submitting -> Success | Failed`. A failed attempt shows its
//! message and the form accepts another submission. Each submission is
//! a single attempt.

use std::sync::{Arc, Mutex};

use super::{SubmitOutcome, failure_message, lock};
use crate::api::AuthBackend;
use crate::auth::SessionManager;
use crate::router::{Location, Navigator, Route};

const LOGIN_FAILED: &str = "ログインに失敗しました";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Submitting,
    Success,
    Failed(String),
}

pub struct LoginPage {
    backend: Arc<dyn AuthBackend>,
    session: SessionManager,
    navigator: Navigator,
    state: Mutex<LoginState>,
}

impl LoginPage {
    pub fn new(backend: Arc<dyn AuthBackend>, session: SessionManager, navigator: Navigator) -> Self {
        Self {
            backend,
            session,
            navigator,
            state: Mutex::new(LoginState::Idle),
        }
    }

    pub fn state(&self) -> LoginState {
        lock(&self.state).clone()
    }

    pub fn is_submitting(&self) -> bool {
        *lock(&self.state) == LoginState::Submitting
    }

    pub fn error(&self) -> Option<String> {
        match &*lock(&self.state) {
            LoginState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub async fn submit(&self, username: &str, password: &str) -> SubmitOutcome {
        // Both fields are required before anything is sent
        if username.trim().is_empty() || password.is_empty() {
            return SubmitOutcome::Ignored;
        }

        {
            let mut state = lock(&self.state);
            if *state == LoginState::Submitting {
                return SubmitOutcome::Ignored;
            }
            *state = LoginState::Submitting;
        }

        // Credentials go out exactly as typed
        match self.backend.login(username, password).await {
            Ok(resp) => {
                self.session.set_auth(&resp.access_token, resp.user);
                let target = self
                    .navigator
                    .current()
                    .from
                    .unwrap_or_else(|| Route::Home.path().to_string());
                self.navigator.replace(Location::new(&target));
                *lock(&self.state) = LoginState::Success;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e, LOGIN_FAILED);
                tracing::warn!("Login failed for {}: {}", username.trim(), message);
                *lock(&self.state) = LoginState::Failed(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
