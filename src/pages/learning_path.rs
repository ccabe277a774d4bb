use std::sync::{Arc, Mutex};

use itertools::Itertools;

use super::{SubmitOutcome, failure_message, lock};
use crate::api::public::learning_path::{LEVELS, ProgressResponse, Topic};
use crate::api::{ApiError, LearningPathBackend};
use crate::storage::StorageError;
use crate::store::LearningProgress;

const LOAD_FAILED: &str = "学習パスの取得に失敗しました";

pub struct LearningPathPage {
    backend: Arc<dyn LearningPathBackend>,
    progress: Mutex<LearningProgress>,
    topics: Mutex<Vec<Topic>>,
    error: Mutex<Option<String>>,
}

impl LearningPathPage {
    pub fn new(backend: Arc<dyn LearningPathBackend>, progress: LearningProgress) -> Self {
        Self {
            backend,
            progress: Mutex::new(progress),
            topics: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    /// Fetch the whole curriculum
    pub async fn load(&self) -> SubmitOutcome {
        match self.backend.get_all().await {
            Ok(resp) => {
                *lock(&self.topics) = resp.topics;
                *lock(&self.error) = None;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e, LOAD_FAILED);
                *lock(&self.error) = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn topics(&self) -> Vec<Topic> {
        lock(&self.topics).clone()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    /// Topics grouped by level in curriculum order, each group sorted by
    /// its `order`. Levels outside the known three come last.
    pub fn topics_by_level(&self) -> Vec<(String, Vec<Topic>)> {
        let rank = |level: &str| LEVELS.iter().position(|l| *l == level).unwrap_or(LEVELS.len());
        lock(&self.topics)
            .iter()
            .cloned()
            .sorted_by(|a, b| {
                rank(&a.level)
                    .cmp(&rank(&b.level))
                    .then_with(|| a.level.cmp(&b.level))
                    .then(a.order.cmp(&b.order))
            })
            .chunk_by(|t| t.level.clone())
            .into_iter()
            .map(|(level, group)| (level, group.collect()))
            .collect()
    }

    pub fn is_completed(&self, topic_id: &str) -> bool {
        lock(&self.progress).is_completed(topic_id)
    }

    pub fn completed(&self) -> Vec<String> {
        lock(&self.progress).completed().to_vec()
    }

    /// Flip completion for `topic_id`, returning the new state
    pub fn toggle(&self, topic_id: &str) -> Result<bool, StorageError> {
        lock(&self.progress).toggle(topic_id)
    }

    pub fn mark_completed(&self, topic_id: &str) -> Result<(), StorageError> {
        lock(&self.progress).mark_completed(topic_id)
    }

    pub fn mark_incomplete(&self, topic_id: &str) -> Result<(), StorageError> {
        lock(&self.progress).mark_incomplete(topic_id)
    }

    pub fn overall_percent(&self) -> u32 {
        let topics = lock(&self.topics);
        lock(&self.progress).overall_percent(&topics)
    }

    pub fn level_percent(&self, level: &str) -> u32 {
        let topics = lock(&self.topics);
        lock(&self.progress).level_percent(&topics, level)
    }

    pub async fn topic(&self, topic_id: &str) -> Result<Topic, ApiError> {
        self.backend.get_topic(topic_id).await
    }

    pub async fn level(&self, level: &str) -> Result<Vec<Topic>, ApiError> {
        Ok(self.backend.get_by_level(level).await?.topics)
    }

    /// Ask the backend to score the locally recorded progress
    pub async fn server_progress(&self) -> Result<ProgressResponse, ApiError> {
        let completed = self.completed();
        self.backend.calculate_progress(&completed).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use async_trait::async_trait;

    use super::*;
    use crate::api::public::learning_path::{LearningPathResponse, LevelTopicsResponse};
    use crate::storage::MemoryStore;

    fn topic(id: &str, level: &str, order: u32) -> Topic {
        Topic {
            id: id.to_string(),
            level: level.to_string(),
            order,
            title: id.to_string(),
            description: String::new(),
            learning_objectives: vec![],
            sample_questions: vec![],
            prerequisites: vec![],
            estimated_time: "30分".to_string(),
            resources: vec![],
        }
    }

    struct FakeCurriculum {
        topics: Vec<Topic>,
    }

    #[async_trait]
    impl LearningPathBackend for FakeCurriculum {
        async fn get_all(&self) -> Result<LearningPathResponse, ApiError> {
            Ok(LearningPathResponse {
                topics: self.topics.clone(),
                total_count: self.topics.len() as u32,
                levels: BTreeMap::new(),
            })
        }

        async fn get_by_level(&self, level: &str) -> Result<LevelTopicsResponse, ApiError> {
            let topics: Vec<Topic> = self
                .topics
                .iter()
                .filter(|t| t.level == level)
                .cloned()
                .collect();
            Ok(LevelTopicsResponse {
                level: level.to_string(),
                count: topics.len() as u32,
                topics,
            })
        }

        async fn get_topic(&self, topic_id: &str) -> Result<Topic, ApiError> {
            self.topics
                .iter()
                .find(|t| t.id == topic_id)
                .cloned()
                .ok_or_else(|| ApiError::Validation(format!("unknown topic {}", topic_id)))
        }

        async fn calculate_progress(
            &self,
            completed_ids: &[String],
        ) -> Result<ProgressResponse, ApiError> {
            Ok(ProgressResponse {
                total_progress: completed_ids.len() as f64 / self.topics.len() as f64,
                completed_count: completed_ids.len() as u32,
                total_count: self.topics.len() as u32,
                levels: BTreeMap::new(),
            })
        }
    }

    fn page() -> LearningPathPage {
        let backend = Arc::new(FakeCurriculum {
            topics: vec![
                topic("advanced-1", "上級", 1),
                topic("basics-2", "初級", 2),
                topic("inter-1", "中級", 1),
                topic("basics-1", "初級", 1),
            ],
        });
        let progress = LearningProgress::load(Arc::new(MemoryStore::new()));
        LearningPathPage::new(backend, progress)
    }

    #[tokio::test]
    async fn test_groups_by_level_in_curriculum_order() {
        let page = page();
        assert_eq!(page.load().await, SubmitOutcome::Succeeded);

        let groups = page.topics_by_level();
        let levels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(levels, vec!["初級", "中級", "上級"]);
        let basics: Vec<&str> = groups[0].1.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(basics, vec!["basics-1", "basics-2"]);
    }

    #[tokio::test]
    async fn test_toggle_and_progress() {
        let page = page();
        page.load().await;

        assert!(page.toggle("basics-1").unwrap());
        assert_eq!(page.overall_percent(), 25);
        assert_eq!(page.level_percent("初級"), 50);

        assert!(!page.toggle("basics-1").unwrap());
        assert!(page.completed().is_empty());
        assert_eq!(page.overall_percent(), 0);
    }

    #[tokio::test]
    async fn test_server_progress_sends_completed_ids() {
        let page = page();
        page.load().await;
        page.mark_completed("basics-1").unwrap();
        page.mark_completed("inter-1").unwrap();

        let resp = page.server_progress().await.unwrap();
        assert_eq!(resp.completed_count, 2);
        assert_eq!(resp.total_progress, 0.5);
    }

    #[tokio::test]
    async fn test_level_lookup() {
        let page = page();
        let topics = page.level("中級").await.unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(page.topic("basics-2").await.unwrap().order, 2);
    }
}
