use tracing::debug;

use crate::article::transform::transform_article;
use crate::article::types::Article;
use crate::newsapi::config::NewsConfig;
use crate::newsapi::error::NewsApiError;
use crate::newsapi::types::{EverythingQuery, HeadlineEnvelope, HeadlinesQuery, SortBy};

/// Client for the two read endpoints of the headline source. No retry,
/// no backoff: a failed call is the caller's cue to fall back to the
/// article store.
pub struct NewsApiClient {
    http: reqwest::Client,
    config: NewsConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Country/category-filtered headlines, paged.
    pub async fn top_headlines(
        &self,
        query: &HeadlinesQuery,
    ) -> Result<HeadlineEnvelope, NewsApiError> {
        self.get("top-headlines", query.to_params()).await
    }

    /// Free-text search with language/date/sort filters, paged.
    pub async fn everything(
        &self,
        query: &EverythingQuery,
    ) -> Result<HeadlineEnvelope, NewsApiError> {
        self.get("everything", query.to_params()).await
    }

    /// Best-match lookup: the single most relevant article for a set of
    /// keywords, already transformed to the display model.
    pub async fn article_by_keywords(
        &self,
        keywords: &str,
    ) -> Result<Option<Article>, NewsApiError> {
        let envelope = self
            .everything(&EverythingQuery {
                q: Some(keywords.to_string()),
                sort_by: Some(SortBy::Relevancy),
                page_size: Some(1),
                ..EverythingQuery::default()
            })
            .await?;

        Ok(envelope.articles.first().map(transform_article))
    }

    async fn get(
        &self,
        endpoint: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<HeadlineEnvelope, NewsApiError> {
        params.push(("apiKey", self.config.api_key.clone()));

        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!("requesting {endpoint} with {} parameters", params.len() - 1);

        let response = self.http.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}
