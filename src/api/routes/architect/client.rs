use async_trait::async_trait;

use super::public::{ArchitectRequest, ArchitectResponse};
use crate::api::{ApiClient, ApiError};

#[async_trait]
pub trait ArchitectBackend: Send + Sync {
    async fn generate(&self, request: &ArchitectRequest) -> Result<ArchitectResponse, ApiError>;
}

#[async_trait]
impl ArchitectBackend for ApiClient {
    async fn generate(&self, request: &ArchitectRequest) -> Result<ArchitectResponse, ApiError> {
        self.post("/architect/generate", request).await
    }
}
