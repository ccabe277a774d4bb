use async_trait::async_trait;

use super::public::{LoginRequest, LoginResponse, LogoutResponse, User};
use crate::api::{ApiClient, ApiError};

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn me(&self) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<LogoutResponse, ApiError>;
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &req).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    // Tokens are stateless on the backend so this only acknowledges
    async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.post("/auth/logout", &serde_json::json!({})).await
    }
}
