use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub code: String,
    pub mermaid: String,
    pub explanation: String,
    pub use_cases: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplatesListResponse {
    pub templates: Vec<Template>,
    pub total_count: u32,
    pub categories: BTreeMap<String, u32>,
    pub difficulties: BTreeMap<String, u32>,
}

/// Category id to display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateCategoriesResponse {
    pub categories: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl TemplateFilter {
    /// Query parameters for the filters that are set and not blank
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("category", &self.category),
            ("difficulty", &self.difficulty),
        ]
        .into_iter()
        .filter_map(|(name, value)| match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some((name, v.to_string())),
            _ => None,
        })
        .collect()
    }
}
