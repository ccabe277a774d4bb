//! Transcript of the question and answer page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::public::rag::RagQueryResponse;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Full backend answer (sources, code examples, confidence, usage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RagQueryResponse>,
}

#[derive(Default, Debug)]
pub struct ChatStore {
    messages: Vec<Message>,
    is_loading: bool,
    error: Option<String>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Append a message stamped with a fresh id and the current time.
    /// Returns the new message's id.
    pub fn add_message(
        &mut self,
        role: Role,
        content: &str,
        data: Option<RagQueryResponse>,
    ) -> String {
        let id = format!("msg-{}", Uuid::new_v4());
        self.messages.push(Message {
            id: id.clone(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            data,
        });
        id
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Drop the whole conversation and any error
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
    }
}
