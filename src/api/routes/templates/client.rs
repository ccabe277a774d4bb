use std::collections::BTreeMap;

use async_trait::async_trait;

use super::public::{Template, TemplateCategoriesResponse, TemplateFilter, TemplatesListResponse};
use crate::api::{ApiClient, ApiError};

#[async_trait]
pub trait TemplatesBackend: Send + Sync {
    async fn list_templates(&self, filter: &TemplateFilter) -> Result<TemplatesListResponse, ApiError>;
    async fn get_categories(&self) -> Result<BTreeMap<String, String>, ApiError>;
    async fn get_by_id(&self, id: &str) -> Result<Template, ApiError>;
}

#[async_trait]
impl TemplatesBackend for ApiClient {
    async fn list_templates(&self, filter: &TemplateFilter) -> Result<TemplatesListResponse, ApiError> {
        self.get_with_query("/templates", &filter.query_pairs())
            .await
    }

    async fn get_categories(&self) -> Result<BTreeMap<String, String>, ApiError> {
        let resp: TemplateCategoriesResponse = self.get("/templates/categories").await?;
        Ok(resp.categories)
    }

    async fn get_by_id(&self, id: &str) -> Result<Template, ApiError> {
        let path = format!("/templates/{}", urlencoding::encode(id));
        self.get(&path).await
    }
}
