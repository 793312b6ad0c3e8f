use chrono::Utc;
use regex::Regex;

use crate::article::types::{Article, Author, SourceRef};
use crate::newsapi::types::RawArticle;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=800&width=1200";
pub const PLACEHOLDER_AVATAR: &str = "/placeholder-user.jpg";

const SLUG_MAX_LEN: usize = 60;

/// Derive a URL-safe slug from a title: lowercase, strip everything that
/// is not a word character, whitespace or hyphen, collapse whitespace
/// runs to single hyphens, collapse hyphen runs, truncate to 60 chars.
pub fn slugify(title: &str) -> String {
    let strip = Regex::new(r"[^\w\s-]").unwrap();
    let spaces = Regex::new(r"\s+").unwrap();
    let dashes = Regex::new(r"-+").unwrap();

    let lowered = title.to_lowercase();
    let stripped = strip.replace_all(&lowered, "");
    let hyphenated = spaces.replace_all(&stripped, "-");
    let collapsed = dashes.replace_all(&hyphenated, "-");

    collapsed.chars().take(SLUG_MAX_LEN).collect()
}

/// Map a raw source record to the display model. Pure and total: every
/// missing field defaults deterministically, so any shape of record
/// produces a renderable article. A record with no title gets a
/// time-based synthetic slug.
pub fn transform_article(raw: &RawArticle) -> Article {
    let title = non_empty(raw.title.as_deref());
    let source_name = raw
        .source
        .as_ref()
        .and_then(|s| non_empty(s.name.as_deref()));

    let slug = match title {
        Some(title) => slugify(title),
        None => format!("article-{}", Utc::now().timestamp_millis()),
    };

    Article {
        slug,
        title: title.unwrap_or("Untitled Article").to_string(),
        excerpt: non_empty(raw.description.as_deref())
            .unwrap_or_default()
            .to_string(),
        content: non_empty(raw.content.as_deref())
            .or_else(|| non_empty(raw.description.as_deref()))
            .unwrap_or_default()
            .to_string(),
        date: non_empty(raw.published_at.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
        category: source_name.unwrap_or("News").to_string(),
        cover_image: non_empty(raw.url_to_image.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        author: Author {
            name: non_empty(raw.author.as_deref())
                .unwrap_or("Unknown Author")
                .to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        },
        sources: non_empty(raw.url.as_deref()).map(|url| {
            vec![SourceRef {
                name: source_name.unwrap_or("Source").to_string(),
                url: url.to_string(),
            }]
        }),
    }
}

// The original defaulting treated empty strings as absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newsapi::types::RawSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("I Use Cursor Daily: Here's How I Avoid The Garbage Parts"),
            "i-use-cursor-daily-heres-how-i-avoid-the-garbage-parts"
        );
        assert_eq!(slugify("Rust 1.80 released!"), "rust-180-released");
        assert_eq!(slugify("a  b\t\nc"), "a-b-c");
        assert_eq!(slugify("pre-existing --- hyphens"), "pre-existing-hyphens");
    }

    #[test]
    fn test_slugify_truncates_to_sixty_chars() {
        let long = "word ".repeat(30);
        let slug = slugify(&long);
        assert_eq!(slug.chars().count(), 60);
        assert!(slug.starts_with("word-word-"));
    }

    #[test]
    fn test_transform_is_total_on_empty_record() {
        let article = transform_article(&RawArticle::default());

        assert!(article.slug.starts_with("article-"));
        assert_eq!(article.title, "Untitled Article");
        assert_eq!(article.excerpt, "");
        assert_eq!(article.content, "");
        assert_eq!(article.category, "News");
        assert_eq!(article.cover_image, PLACEHOLDER_IMAGE);
        assert_eq!(article.author.name, "Unknown Author");
        assert_eq!(article.author.avatar, PLACEHOLDER_AVATAR);
        assert!(article.sources.is_none());
        assert!(!article.date.is_empty());
    }

    #[test]
    fn test_transform_full_record() {
        let raw = RawArticle {
            source: Some(RawSource {
                id: Some("the-wire".to_string()),
                name: Some("The Wire".to_string()),
            }),
            author: Some("Jo Bloggs".to_string()),
            title: Some("Markets Rally After Rate Decision".to_string()),
            description: Some("Stocks climbed on Tuesday.".to_string()),
            url: Some("https://example.com/markets-rally".to_string()),
            url_to_image: Some("https://example.com/rally.jpg".to_string()),
            published_at: Some("2024-05-07T08:00:00Z".to_string()),
            content: Some("Stocks climbed on Tuesday after the decision.".to_string()),
        };

        let article = transform_article(&raw);

        assert_eq!(article.slug, "markets-rally-after-rate-decision");
        assert_eq!(article.title, "Markets Rally After Rate Decision");
        assert_eq!(article.excerpt, "Stocks climbed on Tuesday.");
        assert_eq!(
            article.content,
            "Stocks climbed on Tuesday after the decision."
        );
        assert_eq!(article.date, "2024-05-07T08:00:00Z");
        assert_eq!(article.category, "The Wire");
        assert_eq!(article.cover_image, "https://example.com/rally.jpg");
        assert_eq!(article.author.name, "Jo Bloggs");
        assert_eq!(
            article.sources,
            Some(vec![SourceRef {
                name: "The Wire".to_string(),
                url: "https://example.com/markets-rally".to_string(),
            }])
        );
    }

    #[test]
    fn test_content_falls_back_to_description() {
        let raw = RawArticle {
            title: Some("Quiet Day".to_string()),
            description: Some("Nothing much happened.".to_string()),
            ..RawArticle::default()
        };

        let article = transform_article(&raw);
        assert_eq!(article.content, "Nothing much happened.");
    }

    #[test]
    fn test_source_without_name_still_yields_source_ref() {
        let raw = RawArticle {
            title: Some("Untraceable".to_string()),
            url: Some("https://example.com/untraceable".to_string()),
            ..RawArticle::default()
        };

        let article = transform_article(&raw);
        assert_eq!(
            article.sources,
            Some(vec![SourceRef {
                name: "Source".to_string(),
                url: "https://example.com/untraceable".to_string(),
            }])
        );
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let raw = RawArticle {
            title: Some(String::new()),
            description: Some(String::new()),
            url: Some(String::new()),
            ..RawArticle::default()
        };

        let article = transform_article(&raw);
        assert!(article.slug.starts_with("article-"));
        assert_eq!(article.title, "Untitled Article");
        assert!(article.sources.is_none());
    }
}
