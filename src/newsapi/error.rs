use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsApiError {
    #[error("Error reading config from environment: {0}")]
    Config(String),

    #[error("Request to the news source failed")]
    Transport(#[from] reqwest::Error),

    #[error("News source responded with {0}")]
    Status(StatusCode),
}
