//! The single gateway for backend calls.
//!
//! Every request picks up the bearer token from the persisted session
//! at the moment it is issued. Every failed response goes through the
//! same policy: a 401 anywhere ends the session and sends the user to
//! the login page.

use http::{HeaderMap, HeaderValue, StatusCode, header};
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use super::public::{ApiError, error_message};
use crate::auth::SessionManager;
use crate::core::ClientConfig;
use crate::router::{Navigator, Route};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionManager,
    navigator: Navigator,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: SessionManager,
        navigator: Navigator,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match self.session.persisted_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(transport_error)?;
            return serde_json::from_slice(&body).map_err(|e| {
                tracing::error!("Error: unexpected response body: {}", e);
                ApiError::Decode(e.to_string())
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        tracing::error!("API Error: {}", message);

        if status == StatusCode::UNAUTHORIZED {
            self.on_unauthorized();
            return Err(ApiError::Unauthorized { message });
        }

        Err(ApiError::Server { status, message })
    }

    // Any 401 ends the session client-wide, not just for the endpoint
    // that returned it.
    fn on_unauthorized(&self) {
        self.session.logout();
        if Route::from_path(&self.navigator.current_path()) != Some(Route::Login) {
            self.navigator.hard_navigate(Route::Login.path());
        }
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        tracing::error!("Network Error: {}", err);
        return ApiError::network();
    }
    if err.is_decode() {
        tracing::error!("Error: {}", err);
        return ApiError::Decode(err.to_string());
    }
    tracing::error!("Error: {}", err);
    ApiError::Other(err.into())
}
