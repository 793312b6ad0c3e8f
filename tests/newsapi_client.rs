use mockito::Matcher;
use pretty_assertions::assert_eq;

use newswire::newsapi::{
    client::NewsApiClient,
    config::NewsConfig,
    error::NewsApiError,
    types::{EverythingQuery, HeadlinesQuery, SortBy},
};

fn client_for(server: &mockito::ServerGuard) -> NewsApiClient {
    NewsApiClient::new(NewsConfig::new("test-key", server.url()))
}

#[tokio::test]
async fn test_top_headlines_builds_query_and_parses_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "us".into()),
            Matcher::UrlEncoded("category".into(), "health".into()),
            Matcher::UrlEncoded("pageSize".into(), "12".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(include_str!("fixtures/top_headlines.json"))
        .create_async()
        .await;

    let client = client_for(&server);
    let envelope = client
        .top_headlines(&HeadlinesQuery {
            country: Some("us".to_string()),
            category: Some("health".to_string()),
            page_size: Some(12),
            ..HeadlinesQuery::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(envelope.status.as_deref(), Some("ok"));
    assert_eq!(envelope.articles.len(), 2);
    assert_eq!(
        envelope.articles[0].title.as_deref(),
        Some("City Council Approves Transit Expansion")
    );
    // Partially populated records survive deserialization
    assert_eq!(envelope.articles[1].author, None);
    assert_eq!(envelope.articles[1].content, None);
}

#[tokio::test]
async fn test_everything_builds_search_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/everything")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "solar power".into()),
            Matcher::UrlEncoded("language".into(), "en".into()),
            Matcher::UrlEncoded("sortBy".into(), "publishedAt".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "ok", "totalResults": 0, "articles": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let envelope = client
        .everything(&EverythingQuery {
            q: Some("solar power".to_string()),
            language: Some("en".to_string()),
            sort_by: Some(SortBy::PublishedAt),
            ..EverythingQuery::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(envelope.articles.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"status": "error", "code": "rateLimited"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.top_headlines(&HeadlinesQuery::default()).await;

    match result {
        Err(NewsApiError::Status(status)) => assert_eq!(status.as_u16(), 429),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_articles_field_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "ok", "totalResults": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let envelope = client
        .top_headlines(&HeadlinesQuery::default())
        .await
        .unwrap();

    assert!(envelope.articles.is_empty());
}

#[tokio::test]
async fn test_article_by_keywords_transforms_best_match() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/everything")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "transit expansion".into()),
            Matcher::UrlEncoded("sortBy".into(), "relevancy".into()),
            Matcher::UrlEncoded("pageSize".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(include_str!("fixtures/top_headlines.json"))
        .create_async()
        .await;

    let client = client_for(&server);
    let article = client
        .article_by_keywords("transit expansion")
        .await
        .unwrap()
        .expect("a best match");

    mock.assert_async().await;
    assert_eq!(article.slug, "city-council-approves-transit-expansion");
    assert_eq!(article.category, "The Morning Wire");
}

#[tokio::test]
async fn test_article_by_keywords_with_no_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/everything")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "ok", "totalResults": 0, "articles": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let article = client.article_by_keywords("nothing here").await.unwrap();

    assert!(article.is_none());
}
