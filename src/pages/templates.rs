use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{SubmitOutcome, failure_message, lock};
use crate::api::public::templates::{Template, TemplateFilter};
use crate::api::{ApiError, TemplatesBackend};

const LOAD_FAILED: &str = "テンプレートの取得に失敗しました";

/// Client-side narrowing of the loaded templates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSearch {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub query: String,
}

impl TemplateSearch {
    pub fn matches(&self, template: &Template) -> bool {
        let category = self
            .category
            .as_ref()
            .is_none_or(|c| &template.category == c);
        let difficulty = self
            .difficulty
            .as_ref()
            .is_none_or(|d| &template.difficulty == d);

        let query = self.query.trim().to_lowercase();
        let text = query.is_empty()
            || template.title.to_lowercase().contains(&query)
            || template.description.to_lowercase().contains(&query)
            || template
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));

        category && difficulty && text
    }
}

#[derive(Default)]
struct TemplatesState {
    templates: Vec<Template>,
    categories: BTreeMap<String, String>,
    error: Option<String>,
}

pub struct TemplatesPage {
    backend: Arc<dyn TemplatesBackend>,
    state: Mutex<TemplatesState>,
}

impl TemplatesPage {
    pub fn new(backend: Arc<dyn TemplatesBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(TemplatesState::default()),
        }
    }

    /// Fetch templates and categories together. Filters are passed to
    /// the backend as query parameters.
    pub async fn load(&self, filter: &TemplateFilter) -> SubmitOutcome {
        let result = tokio::try_join!(
            self.backend.list_templates(filter),
            self.backend.get_categories()
        );

        let mut state = lock(&self.state);
        match result {
            Ok((list, categories)) => {
                state.templates = list.templates;
                state.categories = categories;
                state.error = None;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e, LOAD_FAILED);
                state.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn templates(&self) -> Vec<Template> {
        lock(&self.state).templates.clone()
    }

    pub fn categories(&self) -> BTreeMap<String, String> {
        lock(&self.state).categories.clone()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    pub fn filtered(&self, search: &TemplateSearch) -> Vec<Template> {
        lock(&self.state)
            .templates
            .iter()
            .filter(|t| search.matches(t))
            .cloned()
            .collect()
    }

    pub async fn show(&self, id: &str) -> Result<Template, ApiError> {
        self.backend.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use http::StatusCode;

    use super::*;
    use crate::api::public::templates::TemplatesListResponse;

    fn template(id: &str, category: &str, difficulty: &str, tags: &[&str]) -> Template {
        Template {
            id: id.to_string(),
            title: format!("{} title", id),
            description: format!("{} description", id),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            code: String::new(),
            mermaid: String::new(),
            explanation: String::new(),
            use_cases: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    struct FakeTemplates {
        fail_categories: bool,
    }

    #[async_trait]
    impl TemplatesBackend for FakeTemplates {
        async fn list_templates(
            &self,
            _filter: &TemplateFilter,
        ) -> Result<TemplatesListResponse, ApiError> {
            Ok(TemplatesListResponse {
                templates: vec![
                    template("support-bot", "customer_support", "初級", &["FAQ"]),
                    template("report", "data_analysis", "中級", &["Pandas"]),
                ],
                total_count: 2,
                categories: BTreeMap::new(),
                difficulties: BTreeMap::new(),
            })
        }

        async fn get_categories(&self) -> Result<BTreeMap<String, String>, ApiError> {
            if self.fail_categories {
                return Err(ApiError::Server {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal Server Error".to_string(),
                });
            }
            Ok(BTreeMap::from([(
                "customer_support".to_string(),
                "カスタマーサポート".to_string(),
            )]))
        }

        async fn get_by_id(&self, id: &str) -> Result<Template, ApiError> {
            Ok(template(id, "customer_support", "初級", &[]))
        }
    }

    #[tokio::test]
    async fn test_load_and_filter() {
        let page = TemplatesPage::new(Arc::new(FakeTemplates {
            fail_categories: false,
        }));
        assert_eq!(page.load(&TemplateFilter::default()).await, SubmitOutcome::Succeeded);
        assert_eq!(page.templates().len(), 2);
        assert_eq!(page.categories()["customer_support"], "カスタマーサポート");

        let by_category = TemplateSearch {
            category: Some("data_analysis".to_string()),
            ..Default::default()
        };
        assert_eq!(page.filtered(&by_category)[0].id, "report");

        let by_tag = TemplateSearch {
            query: "faq".to_string(),
            ..Default::default()
        };
        assert_eq!(page.filtered(&by_tag)[0].id, "support-bot");

        let nothing = TemplateSearch {
            difficulty: Some("上級".to_string()),
            ..Default::default()
        };
        assert!(page.filtered(&nothing).is_empty());
    }

    #[tokio::test]
    async fn test_either_call_failing_fails_load() {
        let page = TemplatesPage::new(Arc::new(FakeTemplates {
            fail_categories: true,
        }));
        let outcome = page.load(&TemplateFilter::default()).await;
        assert_eq!(outcome, SubmitOutcome::Failed("Internal Server Error".to_string()));
        assert_eq!(page.error(), Some("Internal Server Error".to_string()));
        assert!(page.templates().is_empty());
    }
}
