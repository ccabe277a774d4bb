//! Page flows: validate input, drive a feature store through one
//! backend call and record the result or error for display.
//!
//! Each page allows at most one request in flight. The store's loading
//! flag is checked and set under the store lock before the request is
//! issued and cleared once it settles.

pub mod architect;
pub mod learning_path;
pub mod login;
pub mod rag;
pub mod templates;

use std::sync::{Mutex, MutexGuard};

pub use architect::{ArchitectForm, ArchitectPage};
pub use learning_path::LearningPathPage;
pub use login::{LoginPage, LoginState};
pub use rag::RagPage;
pub use templates::{TemplateSearch, TemplatesPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a request already in flight; nothing was sent
    Ignored,
    Succeeded,
    Failed(String),
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// The message a page shows for a failed call
pub(crate) fn failure_message(err: &crate::api::ApiError, fallback: &str) -> String {
    let message = err.to_string();
    tracing::debug!("Request failed (status {:?}): {}", err.status(), message);
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
