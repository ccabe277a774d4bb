//! Public API types

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Shown when the backend could not be reached at all
pub const NETWORK_ERROR_MESSAGE: &str = "ネットワークエラーが発生しました";

// Errors

/// Every failure a backend call can surface to a page.
///
/// `Display` is the human readable message a page shows inline.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected before anything was sent
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-2xx status other than 401
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// The backend rejected our credential. The session is already
    /// cleared by the time a caller sees this.
    #[error("{message}")]
    Unauthorized { message: String },

    /// No response was received (unreachable, reset or timed out)
    #[error("{message}")]
    Network { message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn network() -> Self {
        ApiError::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// Pull a readable message out of an error response body, falling back
/// to the status text.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    let message = match detail {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        // Request validation failures come back as a list of
        // `{loc, msg, type}` objects
        Some(Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item["msg"].as_str())
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    };

    message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    })
}

/// Model and cost details attached to generated responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMetadata {
    pub model: String,
    pub tokens_used: u64,
    pub response_time: f64,
}

// Re-export public types from each route

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}

pub mod rag {
    pub use crate::api::routes::rag::public::*;
}

pub mod architect {
    pub use crate::api::routes::architect::public::*;
}

pub mod learning_path {
    pub use crate::api::routes::learning_path::public::*;
}

pub mod templates {
    pub use crate::api::routes::templates::public::*;
}
