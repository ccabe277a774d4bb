//! Test utilities for integration tests
use std::time::Duration;

use tempfile::TempDir;

use catalyst::app::App;
use catalyst::auth::User;
use catalyst::core::ClientConfig;

/// Creates an app pointed at `api_base_url` whose persisted state lives
/// in a temporary directory. Keep the returned `TempDir` alive for as
/// long as the app is used.
pub fn test_app(api_base_url: &str) -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let app = reopen(api_base_url, &dir);
    (app, dir)
}

/// A fresh app over the same storage directory, as after a restart.
pub fn reopen(api_base_url: &str, dir: &TempDir) -> App {
    let config = ClientConfig::new(
        api_base_url,
        dir.path().to_str().expect("Temp path is not UTF-8"),
        Duration::from_secs(5),
    );
    App::new(config).expect("Failed to build app")
}

pub fn alice() -> User {
    User::new("alice", "user", Some(5))
}

pub const LOGIN_RESPONSE: &str = r#"{
    "access_token": "jwt-alice",
    "token_type": "bearer",
    "user": {"username": "alice", "role": "user", "daily_limit": 5}
}"#;

pub const RAG_RESPONSE: &str = r#"{
    "answer": "X is a graph.",
    "sources": [],
    "code_examples": [],
    "confidence": 0.8,
    "metadata": {"model": "gpt-4o", "tokens_used": 42, "response_time": 1.2}
}"#;

pub const CURRICULUM_RESPONSE: &str = r#"{
    "topics": [
        {
            "id": "basics-1",
            "level": "初級",
            "order": 1,
            "title": "LangGraphとは",
            "description": "概要",
            "learning_objectives": ["基本を理解する"],
            "sample_questions": ["LangGraphとは？"],
            "prerequisites": [],
            "estimated_time": "30分",
            "resources": []
        },
        {
            "id": "basics-2",
            "level": "初級",
            "order": 2,
            "title": "StateGraph",
            "description": "状態",
            "learning_objectives": [],
            "sample_questions": [],
            "estimated_time": "45分"
        }
    ],
    "total_count": 2,
    "levels": {"初級": 2}
}"#;
