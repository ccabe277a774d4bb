//! Terminal views rendered with Handlebars. Everything shown here came
//! from the backend so the registry is strict and only has the helpers
//! the views need.

use std::fmt;

use anyhow::Result;
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

// Natural numbering for `each` blocks
handlebars_helper!(inc: |v: i64| format!("{}", v + 1));

// Scores arrive as 0.0 to 1.0
handlebars_helper!(pct: |v: f64| format!("{}%", (v * 100.0).round() as i64));

#[derive(Debug, Clone, Copy)]
pub enum View {
    RagAnswer,
    Architecture,
    Template,
    Topic,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const RAG_ANSWER_VIEW: &str = r"
{{answer}}
{{#if code_examples}}

Code examples:
{{#each code_examples}}
--- {{inc @index}}. {{description}} ({{language}})
{{code}}
{{/each}}
{{/if}}
{{#if sources}}

Sources:
{{#each sources}}
  {{inc @index}}. {{title}} [{{doc_type}}] {{pct relevance}}
     {{url}}
{{/each}}
{{/if}}

confidence {{pct confidence}} | {{metadata.model}} | {{metadata.tokens_used}} tokens | {{metadata.response_time}}s
";

const ARCHITECTURE_VIEW: &str = r"
# {{challenge_analysis.summary}}

Approach: {{challenge_analysis.suggested_approach}}
Why LangGraph: {{challenge_analysis.langgraph_fit_reason}}

Requirements:
{{#each challenge_analysis.key_requirements}}
  - {{this}}
{{/each}}

## Graph
{{architecture.mermaid_diagram}}

Nodes:
{{#each architecture.node_descriptions}}
  {{inc @index}}. {{name}} ({{node_id}}): {{purpose}}
{{/each}}

Edges:
{{#each architecture.edge_descriptions}}
  {{from_node}} -> {{to_node}}{{#if condition}} [{{condition}}]{{/if}}: {{description}}
{{/each}}

## Code ({{code_example.language}})
{{code_example.code}}

{{code_example.explanation}}

## For the business
{{business_explanation}}
{{#if implementation_notes}}

Notes:
{{#each implementation_notes}}
  - {{this}}
{{/each}}
{{/if}}
";

const TEMPLATE_VIEW: &str = r"
# {{title}} [{{category}} / {{difficulty}}]

{{description}}

Use cases:
{{#each use_cases}}
  - {{this}}
{{/each}}

## Graph
{{mermaid}}

## Code
{{code}}

{{explanation}}
";

const TOPIC_VIEW: &str = r"
# {{title}} [{{level}} #{{order}}, {{estimated_time}}]

{{description}}

Objectives:
{{#each learning_objectives}}
  - {{this}}
{{/each}}

Try asking:
{{#each sample_questions}}
  {{inc @index}}. {{this}}
{{/each}}
{{#if resources}}

Resources:
{{#each resources}}
  - [{{type}}] {{url}}
{{/each}}
{{/if}}
";

pub fn views<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_helper("inc", Box::new(inc));
    registry.register_helper("pct", Box::new(pct));
    registry.register_template_string(&View::RagAnswer.to_string(), RAG_ANSWER_VIEW)?;
    registry.register_template_string(&View::Architecture.to_string(), ARCHITECTURE_VIEW)?;
    registry.register_template_string(&View::Template.to_string(), TEMPLATE_VIEW)?;
    registry.register_template_string(&View::Topic.to_string(), TOPIC_VIEW)?;
    Ok(registry)
}

pub fn render<T: Serialize>(registry: &Handlebars, view: View, data: &T) -> Result<String> {
    Ok(registry.render(&view.to_string(), data)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::public::rag::RagQueryResponse;

    #[test]
    fn test_render_rag_answer() {
        let resp: RagQueryResponse = serde_json::from_value(serde_json::json!({
            "answer": "Use <StateGraph>.",
            "sources": [{
                "title": "Docs",
                "url": "https://example.com",
                "excerpt": "...",
                "relevance": 0.95,
                "doc_type": "official_docs"
            }],
            "code_examples": [],
            "confidence": 0.891,
            "metadata": {"model": "gpt-4o", "tokens_used": 12, "response_time": 1.5}
        }))
        .unwrap();

        let out = render(&views().unwrap(), View::RagAnswer, &resp).unwrap();
        assert!(out.starts_with("Use <StateGraph>."));
        assert!(out.contains("1. Docs [official_docs] 95%"));
        assert!(!out.contains("Code examples"));
        assert!(out.ends_with("confidence 89% | gpt-4o | 12 tokens | 1.5s"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let out = render(
            &views().unwrap(),
            View::Template,
            &serde_json::json!({"title": "only a title"}),
        );
        assert!(out.is_err());
    }
}
