use std::sync::{Arc, Mutex};

use super::{SubmitOutcome, failure_message, lock};
use crate::api::RagBackend;
use crate::api::public::rag::RagQueryRequest;
use crate::store::{ChatStore, Role};

pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "LangGraphでステートグラフを作成する方法を教えてください",
    "条件分岐(conditional edge)の実装方法は？",
    "LangGraphとLangChainの違いは何ですか？",
    "Human-in-the-loopの実装例を教えてください",
];

/// Assistant reply appended when a question fails
pub const FALLBACK_REPLY: &str = "エラーが発生しました。もう一度お試しください。";

const QUERY_FAILED: &str = "回答の生成に失敗しました";

pub struct RagPage {
    backend: Arc<dyn RagBackend>,
    store: Arc<Mutex<ChatStore>>,
}

impl RagPage {
    pub fn new(backend: Arc<dyn RagBackend>) -> Self {
        Self::with_store(backend, Arc::new(Mutex::new(ChatStore::new())))
    }

    pub fn with_store(backend: Arc<dyn RagBackend>, store: Arc<Mutex<ChatStore>>) -> Self {
        Self { backend, store }
    }

    pub fn store(&self) -> Arc<Mutex<ChatStore>> {
        Arc::clone(&self.store)
    }

    /// Ask `question`. The user message is shown before the backend
    /// answers; the answer or a fallback reply follows it.
    pub async fn submit(&self, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }

        {
            let mut store = lock(&self.store);
            if store.is_loading() {
                tracing::debug!("Question ignored, one is already in flight");
                return SubmitOutcome::Ignored;
            }
            store.set_error(None);
            store.add_message(Role::User, question, None);
            store.set_loading(true);
        }

        let result = self.backend.query(&RagQueryRequest::new(question)).await;

        let mut store = lock(&self.store);
        let outcome = match result {
            Ok(resp) => {
                let answer = resp.answer.clone();
                store.add_message(Role::Assistant, &answer, Some(resp));
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e, QUERY_FAILED);
                store.set_error(Some(message.clone()));
                store.add_message(Role::Assistant, FALLBACK_REPLY, None);
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
