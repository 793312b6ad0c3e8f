// HTTP server module

pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::article::store::ArticleStore;
use crate::newsapi::client::NewsApiClient;
use crate::summarize::SummarizerClient;

/// Shared state for the page render sites. The store is an owned object
/// handed to every handler rather than a module-level global, so the
/// races described in the concurrency model stay visible and testable.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArticleStore>,
    pub news: Arc<NewsApiClient>,
    pub summarizer: Arc<SummarizerClient>,
    pub default_country: String,
    pub page_size: u32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(pages::health))
        .route("/", get(pages::home))
        .route("/category/{category}", get(pages::category))
        .route("/search", get(pages::search))
        .route("/article/{slug}", get(pages::article))
        .route("/api/article", get(pages::api_article))
        .route("/api/summarize", post(pages::api_summarize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
