use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Returned when no summarization backend is configured. The real model
/// integration replaces this; callers must not depend on its wording.
pub const PLACEHOLDER_SUMMARY: &str =
    "This is a placeholder for the generated summary. The summary would provide a \
     concise overview of the key points from the article, making it easier for \
     readers to quickly understand the main ideas without reading the entire piece.";

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Request to the summarizer failed")]
    Transport(#[from] reqwest::Error),

    #[error("Summarizer responded with {0}")]
    Status(StatusCode),
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Client for the prototype summarization endpoint. With no endpoint
/// configured it answers immediately with [`PLACEHOLDER_SUMMARY`].
pub struct SummarizerClient {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl SummarizerClient {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(std::env::var("SUMMARIZER_URL").ok())
    }

    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let Some(endpoint) = &self.endpoint else {
            debug!("no summarizer configured, returning placeholder");
            return Ok(PLACEHOLDER_SUMMARY.to_string());
        };

        let response = self
            .http
            .post(format!("{endpoint}/summarize"))
            .json(&SummarizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::Status(status));
        }

        let body: SummarizeResponse = response.json().await?;
        Ok(body.summary)
    }
}
