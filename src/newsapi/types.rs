use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One article record as the headline source returns it. Every field is
/// optional: records arrive partially populated and the transformer is
/// responsible for defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response envelope for both read endpoints. A missing or non-array
/// `articles` field is an empty result, never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default, deserialize_with = "articles_or_empty")]
    pub articles: Vec<RawArticle>,
}

fn articles_or_empty<'de, D>(deserializer: D) -> Result<Vec<RawArticle>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Filters for the top-headlines endpoint. Only set fields become query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl HeadlinesQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(country) = &self.country {
            params.push(("country", country.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

/// Filters for the everything (free-text search) endpoint.
#[derive(Debug, Clone, Default)]
pub struct EverythingQuery {
    pub q: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<SortBy>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl EverythingQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(from) = &self.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            params.push(("to", to.clone()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Relevancy,
    Popularity,
    PublishedAt,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<SortBy> {
        match value {
            "relevancy" => Some(SortBy::Relevancy),
            "popularity" => Some(SortBy::Popularity),
            "publishedAt" => Some(SortBy::PublishedAt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}
