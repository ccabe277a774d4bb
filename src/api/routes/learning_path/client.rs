use async_trait::async_trait;

use super::public::{
    LearningPathResponse, LevelTopicsResponse, ProgressRequest, ProgressResponse, Topic,
};
use crate::api::{ApiClient, ApiError};

#[async_trait]
pub trait LearningPathBackend: Send + Sync {
    async fn get_all(&self) -> Result<LearningPathResponse, ApiError>;
    async fn get_by_level(&self, level: &str) -> Result<LevelTopicsResponse, ApiError>;
    async fn get_topic(&self, topic_id: &str) -> Result<Topic, ApiError>;
    async fn calculate_progress(
        &self,
        completed_ids: &[String],
    ) -> Result<ProgressResponse, ApiError>;
}

#[async_trait]
impl LearningPathBackend for ApiClient {
    async fn get_all(&self) -> Result<LearningPathResponse, ApiError> {
        self.get("/learning-path").await
    }

    async fn get_by_level(&self, level: &str) -> Result<LevelTopicsResponse, ApiError> {
        let path = format!("/learning-path/level/{}", urlencoding::encode(level));
        self.get(&path).await
    }

    async fn get_topic(&self, topic_id: &str) -> Result<Topic, ApiError> {
        let path = format!("/learning-path/topic/{}", urlencoding::encode(topic_id));
        self.get(&path).await
    }

    async fn calculate_progress(
        &self,
        completed_ids: &[String],
    ) -> Result<ProgressResponse, ApiError> {
        let req = ProgressRequest {
            completed_topic_ids: completed_ids.to_vec(),
        };
        self.post("/learning-path/progress", &req).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::auth::SessionManager;
    use crate::core::ClientConfig;
    use crate::router::Navigator;
    use crate::storage::MemoryStore;

    const TOPIC: &str = r#"{
        "id": "basics-1",
        "level": "初級",
        "order": 1,
        "title": "StateGraphの基本",
        "description": "グラフの作り方",
        "learning_objectives": ["ノードを追加できる"],
        "sample_questions": ["StateGraphとは？"],
        "estimated_time": "30分"
    }"#;

    fn client(url: &str) -> ApiClient {
        let config = ClientConfig::new(url, "/tmp", Duration::from_secs(5));
        let session = SessionManager::load(Arc::new(MemoryStore::new()));
        ApiClient::new(&config, session, Navigator::new("/learning-path")).unwrap()
    }

    #[tokio::test]
    async fn test_get_all() {
        let mut server = mockito::Server::new_async().await;
        let body = format!(
            r#"{{"topics":[{}],"total_count":1,"levels":{{"初級":1}}}}"#,
            TOPIC
        );
        let _mock = server
            .mock("GET", "/learning-path")
            .with_status(200)
            .with_body(body)
            .create();

        let resp = client(&server.url()).get_all().await.unwrap();
        assert_eq!(resp.total_count, 1);
        assert_eq!(resp.topics[0].id, "basics-1");
        assert!(resp.topics[0].prerequisites.is_empty());
        assert_eq!(resp.levels["初級"], 1);
    }

    #[tokio::test]
    async fn test_get_by_level_encodes_level() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/learning-path/level/%E4%B8%AD%E7%B4%9A")
            .with_status(200)
            .with_body(r#"{"level":"中級","topics":[],"count":0}"#)
            .create();

        let resp = client(&server.url()).get_by_level("中級").await.unwrap();
        mock.assert();
        assert_eq!(resp.level, "中級");
        assert_eq!(resp.count, 0);
    }

    #[tokio::test]
    async fn test_get_topic_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/learning-path/topic/missing")
            .with_status(404)
            .with_body(r#"{"detail":"トピックID 'missing' が見つかりません"}"#)
            .create();

        let err = client(&server.url()).get_topic("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "トピックID 'missing' が見つかりません");
    }

    #[tokio::test]
    async fn test_calculate_progress() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/learning-path/progress")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"completed_topic_ids": ["basics-1"]}),
            ))
            .with_status(200)
            .with_body(
                r#"{"total_progress":0.5,"completed_count":1,"total_count":2,"levels":{"初級":{"progress":0.5,"completed":1,"total":2}}}"#,
            )
            .create();

        let resp = client(&server.url())
            .calculate_progress(&["basics-1".to_string()])
            .await
            .unwrap();
        mock.assert();
        assert_eq!(resp.completed_count, 1);
        assert_eq!(resp.levels["初級"].total, 2);
    }
}
