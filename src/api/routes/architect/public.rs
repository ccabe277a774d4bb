use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::api::public::ResponseMetadata;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchitectRequest {
    pub business_challenge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub constraints: Vec<String>,
}

impl ArchitectRequest {
    pub fn new(business_challenge: &str) -> Self {
        Self {
            business_challenge: business_challenge.to_string(),
            industry: None,
            constraints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChallengeAnalysis {
    pub summary: String,
    pub key_requirements: Vec<String>,
    pub suggested_approach: String,
    pub langgraph_fit_reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDescription {
    pub node_id: String,
    pub name: String,
    pub purpose: String,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDescription {
    pub from_node: String,
    pub to_node: String,
    #[serde(default)]
    pub condition: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Architecture {
    // Mermaid flowchart source
    pub mermaid_diagram: String,
    pub node_descriptions: Vec<NodeDescription>,
    pub edge_descriptions: Vec<EdgeDescription>,
    #[serde(default)]
    pub state_schema: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedCode {
    pub language: String,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchitectResponse {
    pub challenge_analysis: ChallengeAnalysis,
    pub architecture: Architecture,
    pub code_example: GeneratedCode,
    pub business_explanation: String,
    #[serde(default)]
    pub implementation_notes: Vec<String>,
    pub metadata: ResponseMetadata,
}
