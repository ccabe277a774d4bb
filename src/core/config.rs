use std::env;
use std::time::Duration;

/// Default backend location when `CATALYST_API_BASE_URL` is unset
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Generative endpoints can take a long time to respond
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_path: String,
    pub store_path: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base_url: &str, storage_path: &str, timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            storage_path: storage_path.to_string(),
            store_path: format!("{}/store", storage_path.trim_end_matches('/')),
            timeout,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let api_base_url =
            env::var("CATALYST_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let storage_path = env::var("CATALYST_STORAGE_PATH").unwrap_or("./".to_string());
        let timeout_secs = env::var("CATALYST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(
            &api_base_url,
            &storage_path,
            Duration::from_secs(timeout_secs),
        )
    }
}
