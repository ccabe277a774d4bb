use async_trait::async_trait;

use super::public::{RagHealth, RagQueryRequest, RagQueryResponse};
use crate::api::{ApiClient, ApiError};

#[async_trait]
pub trait RagBackend: Send + Sync {
    async fn query(&self, request: &RagQueryRequest) -> Result<RagQueryResponse, ApiError>;
    async fn health(&self) -> Result<RagHealth, ApiError>;
}

#[async_trait]
impl RagBackend for ApiClient {
    async fn query(&self, request: &RagQueryRequest) -> Result<RagQueryResponse, ApiError> {
        self.post("/rag/query", request).await
    }

    async fn health(&self) -> Result<RagHealth, ApiError> {
        self.get("/rag/health").await
    }
}
