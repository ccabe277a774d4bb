use serde::{Deserialize, Serialize};

pub use crate::api::public::ResponseMetadata;

/// Number of documents retrieved when the caller doesn't say
pub const DEFAULT_K: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagQueryRequest {
    pub question: String,
    pub k: u32,
    pub include_sources: bool,
    pub include_code_examples: bool,
}

impl RagQueryRequest {
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            k: DEFAULT_K,
            include_sources: true,
            include_code_examples: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub relevance: f64,
    // official_docs, blog or github
    pub doc_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeExample {
    pub language: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagQueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
    pub confidence: f64,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagHealth {
    pub status: String,
    pub vectorstore_connected: bool,
    pub document_count: u64,
}
