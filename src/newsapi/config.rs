use crate::newsapi::error::NewsApiError;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Static credential and endpoint for the headline source. The base URL
/// is overridable so tests can point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
}

impl NewsConfig {
    pub fn from_env() -> Result<Self, NewsApiError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("NEWSAPI_KEY")
            .map_err(|_| NewsApiError::Config("NEWSAPI_KEY not set".to_string()))?;
        let base_url =
            std::env::var("NEWSAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}
