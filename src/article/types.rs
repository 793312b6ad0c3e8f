use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Display record for a single news item.
///
/// `slug` is the identity: exactly one article per slug exists in the
/// store at any time. `date` is kept as the string the source gave us and
/// may be unparseable; rendering goes through [`format_date`] so a bad
/// date never fails a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub category: String,
    pub cover_image: String,
    pub author: Author,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceRef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub name: String,
    pub url: String,
}

/// The categories the headline source accepts. Anything else in a
/// `/category/{..}` path is a not-found condition, not a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "business" => Some(Category::Business),
            "entertainment" => Some(Category::Entertainment),
            "general" => Some(Category::General),
            "health" => Some(Category::Health),
            "science" => Some(Category::Science),
            "sports" => Some(Category::Sports),
            "technology" => Some(Category::Technology),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render an article date as "Month Day, Year". Accepts RFC 3339 stamps
/// and bare dates; anything unparseable renders as the literal
/// "Invalid date" rather than failing the view.
pub fn format_date(date: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(date)
        .map(|stamp| stamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"));

    match parsed {
        Ok(day) => day.format("%B %-d, %Y").to_string(),
        Err(_) => "Invalid date".to_string(),
    }
}

/// Seed articles guaranteeing the store is never empty. Defined once at
/// process start and never removed.
pub fn fallback_articles() -> Vec<Article> {
    vec![
        Article {
            slug: "how-in-memory-caches-keep-news-sites-fast".to_string(),
            title: "How In-Memory Caches Keep News Sites Fast".to_string(),
            excerpt: "Most headline pages are rebuilt from the same dozen stories. \
                      A small cache with a short shelf life does most of the work."
                .to_string(),
            content: "<p>News front pages change slowly compared to how often they are \
                      requested. Holding the last fetched batch of stories in memory and \
                      reusing it for a few minutes removes almost all upstream traffic \
                      without readers noticing.</p>\
                      <h2>Staleness as a feature</h2>\
                      <p>A five minute window is long enough to absorb a burst of page \
                      loads and short enough that a breaking story still surfaces \
                      quickly. When the upstream source is down, yesterday's stories \
                      beat an error page.</p>\
                      <h2>What to watch for</h2>\
                      <ul>\
                      <li>Serving an empty page because a refresh returned nothing</li>\
                      <li>Two stories landing under the same identifier</li>\
                      <li>Cache resets that throw away hand-added entries</li>\
                      </ul>"
                .to_string(),
            date: "2024-03-18".to_string(),
            category: "Technology".to_string(),
            cover_image: "/placeholder.svg?height=800&width=1200".to_string(),
            author: Author {
                name: "Newswire Staff".to_string(),
                avatar: "/placeholder.svg?height=100&width=100".to_string(),
            },
            sources: Some(vec![SourceRef {
                name: "Newswire Notes".to_string(),
                url: "https://example.com/notes/in-memory-caches".to_string(),
            }]),
        },
        Article {
            slug: "reading-the-weather-in-satellite-data".to_string(),
            title: "Reading the Weather in Satellite Data".to_string(),
            excerpt: "Forecasters now lean on machine-read satellite imagery as much as \
                      ground stations. Here is what changed."
                .to_string(),
            content: "<p>A generation ago a forecast started with balloon soundings and \
                      surface reports. Today the bulk of the input is satellite imagery, \
                      processed into temperature and moisture profiles before a human \
                      ever looks at it.</p>\
                      <h2>More data, shorter windows</h2>\
                      <p>The newest instruments refresh a full hemisphere every ten \
                      minutes, which is why short-range severe weather warnings have \
                      improved faster than five-day outlooks.</p>\
                      <p>The open question is archival: petabytes a year of imagery are \
                      being kept with no agreed retention policy.</p>"
                .to_string(),
            date: "2024-02-02".to_string(),
            category: "Science".to_string(),
            cover_image: "/placeholder.svg?height=800&width=1200".to_string(),
            author: Author {
                name: "Newswire Staff".to_string(),
                avatar: "/placeholder.svg?height=100&width=100".to_string(),
            },
            sources: Some(vec![SourceRef {
                name: "Newswire Notes".to_string(),
                url: "https://example.com/notes/satellite-weather".to_string(),
            }]),
        },
    ]
}
