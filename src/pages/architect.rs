use std::sync::{Arc, Mutex};

use super::{SubmitOutcome, failure_message, lock};
use crate::api::ArchitectBackend;
use crate::api::public::architect::ArchitectRequest;
use crate::store::GenerationStore;

pub const SAMPLE_CHALLENGES: [&str; 2] = [
    "カスタマーサポートの自動化を実現したい。FAQへの自動回答と、複雑な問い合わせは人間にエスカレーションする仕組みが必要。",
    "データ分析ワークフローを自動化したい。複数のデータソースから情報を収集し、分析結果をレポートとしてまとめたい。",
];

const GENERATE_FAILED: &str = "構成案の生成に失敗しました";

/// What the user typed into the generation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchitectForm {
    pub business_challenge: String,
    pub industry: String,
    pub constraints: Vec<String>,
}

impl ArchitectForm {
    pub fn new(business_challenge: &str) -> Self {
        Self {
            business_challenge: business_challenge.to_string(),
            ..Default::default()
        }
    }

    /// `None` when the challenge is blank
    pub fn to_request(&self) -> Option<ArchitectRequest> {
        let challenge = self.business_challenge.trim();
        if challenge.is_empty() {
            return None;
        }
        let industry = self.industry.trim();
        Some(ArchitectRequest {
            business_challenge: challenge.to_string(),
            industry: (!industry.is_empty()).then(|| industry.to_string()),
            constraints: self
                .constraints
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

pub struct ArchitectPage {
    backend: Arc<dyn ArchitectBackend>,
    store: Arc<Mutex<GenerationStore>>,
}

impl ArchitectPage {
    pub fn new(backend: Arc<dyn ArchitectBackend>) -> Self {
        Self {
            backend,
            store: Arc::new(Mutex::new(GenerationStore::new())),
        }
    }

    pub fn store(&self) -> Arc<Mutex<GenerationStore>> {
        Arc::clone(&self.store)
    }

    pub async fn submit(&self, form: &ArchitectForm) -> SubmitOutcome {
        let Some(request) = form.to_request() else {
            return SubmitOutcome::Ignored;
        };

        {
            let mut store = lock(&self.store);
            if store.is_loading() {
                tracing::debug!("Generation ignored, one is already in flight");
                return SubmitOutcome::Ignored;
            }
            store.set_error(None);
            store.set_loading(true);
        }

        let result = self.backend.generate(&request).await;

        let mut store = lock(&self.store);
        let outcome = match result {
            Ok(resp) => {
                store.set_result(Some(resp));
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e, GENERATE_FAILED);
                store.set_error(Some(message.clone()));
                SubmitOutcome::Failed(message)
            }
        };
        store.set_loading(false);
        outcome
    }

    pub fn clear(&self) {
        lock(&self.store).clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use http::StatusCode;

    use super::*;
    use crate::api::ApiError;
    use crate::api::public::ResponseMetadata;
    use crate::api::public::architect::{
        ArchitectResponse, Architecture, ChallengeAnalysis, GeneratedCode,
    };

    fn proposal(summary: &str) -> ArchitectResponse {
        ArchitectResponse {
            challenge_analysis: ChallengeAnalysis {
                summary: summary.to_string(),
                key_requirements: vec![],
                suggested_approach: String::new(),
                langgraph_fit_reason: String::new(),
            },
            architecture: Architecture {
                mermaid_diagram: "graph TD\n A --> B".to_string(),
                node_descriptions: vec![],
                edge_descriptions: vec![],
                state_schema: BTreeMap::new(),
            },
            code_example: GeneratedCode {
                language: "python".to_string(),
                code: String::new(),
                explanation: String::new(),
            },
            business_explanation: String::new(),
            implementation_notes: vec![],
            metadata: ResponseMetadata {
                model: "gpt-4o".to_string(),
                tokens_used: 1,
                response_time: 0.1,
            },
        }
    }

    #[derive(Default)]
    struct FakeArchitect {
        calls: AtomicUsize,
        last: Mutex<Option<ArchitectRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl ArchitectBackend for FakeArchitect {
        async fn generate(
            &self,
            request: &ArchitectRequest,
        ) -> Result<ArchitectResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(ApiError::Server {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "LLMエラー: timeout".to_string(),
                });
            }
            Ok(proposal(&request.business_challenge))
        }
    }

    #[test]
    fn test_form_to_request() {
        assert_eq!(ArchitectForm::new("   ").to_request(), None);

        let form = ArchitectForm {
            business_challenge: "  自動化したい ".to_string(),
            industry: " ".to_string(),
            constraints: vec!["日本語対応必須".to_string(), "  ".to_string()],
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.business_challenge, "自動化したい");
        assert_eq!(req.industry, None);
        assert_eq!(req.constraints, vec!["日本語対応必須".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_challenge_never_calls_backend() {
        let backend = Arc::new(FakeArchitect::default());
        let page = ArchitectPage::new(backend.clone());

        assert_eq!(page.submit(&ArchitectForm::new("")).await, SubmitOutcome::Ignored);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert!(!page.store().lock().unwrap().is_loading());
    }

    #[tokio::test]
    async fn test_success_stores_result() {
        let backend = Arc::new(FakeArchitect::default());
        let page = ArchitectPage::new(backend.clone());

        let mut form = ArchitectForm::new(SAMPLE_CHALLENGES[0]);
        form.industry = "EC".to_string();
        assert_eq!(page.submit(&form).await, SubmitOutcome::Succeeded);

        let sent = backend.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.industry, Some("EC".to_string()));

        let store = page.store();
        let store = store.lock().unwrap();
        assert_eq!(
            store.result().map(|r| r.challenge_analysis.summary.as_str()),
            Some(SAMPLE_CHALLENGES[0])
        );
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_keeps_previous_result() {
        let page = ArchitectPage::new(Arc::new(FakeArchitect::default()));
        page.submit(&ArchitectForm::new("first")).await;

        let failing = ArchitectPage {
            backend: Arc::new(FakeArchitect {
                fail: true,
                ..Default::default()
            }),
            store: page.store(),
        };
        let outcome = failing.submit(&ArchitectForm::new("second")).await;
        assert_eq!(outcome, SubmitOutcome::Failed("LLMエラー: timeout".to_string()));

        let store = page.store();
        let store = store.lock().unwrap();
        assert_eq!(store.error(), Some("LLMエラー: timeout"));
        assert_eq!(
            store.result().map(|r| r.challenge_analysis.summary.as_str()),
            Some("first")
        );
        assert!(!store.is_loading());
    }
}
