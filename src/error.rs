use std::error::Error;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::newsapi::error::NewsApiError;
use crate::summarize::SummarizeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error fetching from the news source")]
    News(#[from] NewsApiError),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No article found for: {0}")]
    ArticleNotFound(String),

    #[error("Please provide the article text in the 'article' or 'text' field")]
    MissingText,

    #[error("Error generating summary")]
    Summarize(#[from] SummarizeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = match self {
            ApiError::News(_) => StatusCode::BAD_GATEWAY,
            ApiError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            ApiError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::Summarize(_) => StatusCode::BAD_GATEWAY,
        };

        let payload = Json(json!({"message": self.to_string()}));

        (status, payload).into_response()
    }
}
