use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Levels in curriculum order
pub const LEVELS: [&str; 3] = ["初級", "中級", "上級"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub r#type: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub id: String,
    pub level: String,
    pub order: u32,
    pub title: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
    pub sample_questions: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub estimated_time: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningPathResponse {
    pub topics: Vec<Topic>,
    pub total_count: u32,
    pub levels: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelTopicsResponse {
    pub level: String,
    pub topics: Vec<Topic>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressRequest {
    pub completed_topic_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelProgress {
    // 0.0 to 1.0
    pub progress: f64,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressResponse {
    pub total_progress: f64,
    pub completed_count: u32,
    pub total_count: u32,
    pub levels: BTreeMap<String, LevelProgress>,
}
