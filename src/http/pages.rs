use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::article::transform::transform_article;
use crate::article::types::{format_date, Article, Author, Category};
use crate::error::ApiError;
use crate::http::AppState;
use crate::newsapi::types::{EverythingQuery, HeadlinesQuery, SortBy};

/// Card view of an article as the listing pages show it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub cover_image: String,
    pub author: Author,
    pub display_date: String,
}

impl ArticleCard {
    fn from_article(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            category: article.category.clone(),
            cover_image: article.cover_image.clone(),
            author: article.author.clone(),
            display_date: format_date(&article.date),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub heading: String,
    pub articles: Vec<ArticleCard>,
}

impl Listing {
    fn new(heading: impl Into<String>, articles: &[Article]) -> Self {
        Self {
            heading: heading.into(),
            articles: articles.iter().map(ArticleCard::from_article).collect(),
        }
    }
}

/// Full article plus the formatted date the detail view renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    pub display_date: String,
}

impl ArticleView {
    fn new(article: Article) -> Self {
        Self {
            display_date: format_date(&article.date),
            article,
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    pub country: Option<String>,
    pub category: Option<String>,
}

/// Home listing. Consults the store's staleness check before going to
/// the remote source; any fetch problem degrades to the cached or
/// fallback articles and is never surfaced as an error page.
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> Json<Listing> {
    let country = params
        .country
        .unwrap_or_else(|| state.default_country.clone());
    let category = params.category.filter(|c| c != "all");

    let articles = latest_news(&state, &country, category).await;
    Json(Listing::new("Latest News", &articles))
}

async fn latest_news(state: &AppState, country: &str, category: Option<String>) -> Vec<Article> {
    if state.store.should_refresh() {
        let query = HeadlinesQuery {
            country: Some(country.to_string()),
            category,
            page_size: Some(state.page_size),
            ..HeadlinesQuery::default()
        };

        match state.news.top_headlines(&query).await {
            Ok(envelope) if !envelope.articles.is_empty() => {
                let transformed: Vec<Article> =
                    envelope.articles.iter().map(transform_article).collect();
                state.store.set_articles(transformed.clone());
                info!("refreshed article cache with {} articles", transformed.len());
                return transformed;
            }
            Ok(_) => warn!("news source returned no articles, serving cached"),
            Err(e) => warn!("failed to fetch articles: {e}"),
        }
    }

    state.store.articles()
}

/// Category listing. The path segment must be one of the source's fixed
/// categories; anything else is a 404 before any fetch happens.
pub async fn category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    let category =
        Category::parse(&category).ok_or_else(|| ApiError::UnknownCategory(category.clone()))?;

    let query = HeadlinesQuery {
        country: Some(state.default_country.clone()),
        category: Some(category.as_str().to_string()),
        page_size: Some(state.page_size),
        ..HeadlinesQuery::default()
    };

    let articles = match state.news.top_headlines(&query).await {
        Ok(envelope) => envelope
            .articles
            .iter()
            .map(transform_article)
            .collect::<Vec<_>>(),
        Err(e) => {
            warn!("failed to fetch {category} articles: {e}");
            Vec::new()
        }
    };

    Ok(Json(Listing::new(format!("{category} news"), &articles)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListing {
    pub query: String,
    pub articles: Vec<ArticleCard>,
}

/// Free-text search. An empty query renders an empty result without
/// calling the source; a failed call renders an empty result too.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchListing> {
    let query_text = params.q.clone().unwrap_or_default();

    let articles = if query_text.is_empty() {
        Vec::new()
    } else {
        search_articles(&state, &params).await
    };

    Json(SearchListing {
        query: query_text,
        articles: articles.iter().map(ArticleCard::from_article).collect(),
    })
}

async fn search_articles(state: &AppState, params: &SearchParams) -> Vec<Article> {
    // Unrecognized sortBy values are dropped rather than forwarded
    let sort_by = params.sort_by.as_deref().and_then(SortBy::parse);

    let query = EverythingQuery {
        q: params.q.clone(),
        language: params.language.clone(),
        sort_by,
        from: params.from.clone(),
        to: params.to.clone(),
        page_size: Some(state.page_size),
        ..EverythingQuery::default()
    };

    match state.news.everything(&query).await {
        Ok(envelope) => envelope.articles.iter().map(transform_article).collect(),
        Err(e) => {
            warn!("search failed: {e}");
            Vec::new()
        }
    }
}

/// Article detail. Resolves from the store (cache first, fallback set
/// second); on a miss, tries a keyword lookup derived from the slug and
/// caches the result for later renders.
pub async fn article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleView>, ApiError> {
    if let Some(article) = state.store.article_by_slug(&slug) {
        return Ok(Json(ArticleView::new(article)));
    }

    let keywords = slug.replace('-', " ");
    match state.news.article_by_keywords(&keywords).await {
        Ok(Some(article)) => {
            state.store.add_article(article.clone());
            Ok(Json(ArticleView::new(article)))
        }
        Ok(None) => Err(ApiError::ArticleNotFound(slug)),
        Err(e) => {
            warn!("keyword lookup for {slug} failed: {e}");
            Err(ApiError::ArticleNotFound(slug))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiArticleParams {
    pub q: Option<String>,
}

/// Prototype surface: fetch one article by keywords for the summary app.
pub async fn api_article(
    State(state): State<AppState>,
    Query(params): Query<ApiArticleParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let keywords = params.q.unwrap_or_else(|| "technology".to_string());

    let article = state
        .news
        .article_by_keywords(&keywords)
        .await?
        .ok_or_else(|| ApiError::ArticleNotFound(keywords))?;

    state.store.add_article(article.clone());

    Ok(Json(json!({
        "title": article.title,
        "article": article.content,
    })))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    // The prototype UI posts `article`, its backend reads `text`
    pub article: Option<String>,
    pub text: Option<String>,
}

pub async fn api_summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = body
        .article
        .or(body.text)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingText)?;

    let summary = state.summarizer.summarize(&text).await?;

    Ok(Json(json!({
        "input": text,
        "summary": summary,
    })))
}
