use std::collections::HashSet;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::article::types::{fallback_articles, Article};

/// How long a fetched batch is considered fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct StoreInner {
    cached: Vec<Article>,
    last_fetch: Option<Instant>,
}

/// Process-wide working set of articles with an advisory refresh policy.
///
/// The store does no I/O and never fails: render sites ask
/// [`ArticleStore::should_refresh`] before calling the remote source, push
/// a successful batch back with [`ArticleStore::set_articles`], and fall
/// back to [`ArticleStore::articles`] on any fetch error. The fallback
/// seed set is a permanent floor, so that fallback is always non-empty.
///
/// One instance is owned by the application state and shared across
/// handlers; operations are individually atomic but the
/// check-fetch-store sequence is not, so overlapping renders may fetch
/// redundantly and race with last-write-wins.
pub struct ArticleStore {
    fallback: Vec<Article>,
    inner: Mutex<StoreInner>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::with_fallback(fallback_articles())
    }

    /// Seed with a caller-supplied fallback set.
    pub fn with_fallback(fallback: Vec<Article>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                cached: fallback.clone(),
                last_fetch: None,
            }),
            fallback,
        }
    }

    /// Snapshot of the current cache. Returns the fallback set if the
    /// cache is empty for any reason.
    pub fn articles(&self) -> Vec<Article> {
        match self.inner.lock() {
            Ok(inner) if !inner.cached.is_empty() => inner.cached.clone(),
            _ => self.fallback.clone(),
        }
    }

    /// Look up by slug in the cache first, then in the fallback set.
    /// Fallback entries are never evicted, so any slug ever present in
    /// either set stays resolvable across cache replacements.
    pub fn article_by_slug(&self, slug: &str) -> Option<Article> {
        if let Ok(inner) = self.inner.lock() {
            if let Some(article) = inner.cached.iter().find(|a| a.slug == slug) {
                return Some(article.clone());
            }
        }

        self.fallback.iter().find(|a| a.slug == slug).cloned()
    }

    /// Merge a fetched batch into the cache and stamp the fetch time.
    ///
    /// The pristine fallback set is re-prepended, previously added
    /// entries keep their slot, and an incoming article is appended only
    /// if its slug is novel: on a slug collision the already-cached
    /// article wins.
    pub fn set_articles(&self, incoming: Vec<Article>) {
        if let Ok(mut inner) = self.inner.lock() {
            let cached_slugs: HashSet<String> =
                inner.cached.iter().map(|a| a.slug.clone()).collect();
            let fallback_slugs: HashSet<&str> =
                self.fallback.iter().map(|a| a.slug.as_str()).collect();

            let mut next = self.fallback.clone();
            next.extend(
                inner
                    .cached
                    .iter()
                    .filter(|a| !fallback_slugs.contains(a.slug.as_str()))
                    .cloned(),
            );
            next.extend(
                incoming
                    .into_iter()
                    .filter(|a| !cached_slugs.contains(&a.slug)),
            );

            inner.cached = next;
            inner.last_fetch = Some(Instant::now());
        }
    }

    /// Upsert a single article by slug: replaces the existing entry at
    /// its position, otherwise appends. Does not count as a fetch.
    pub fn add_article(&self, article: Article) {
        if let Ok(mut inner) = self.inner.lock() {
            match inner.cached.iter_mut().find(|a| a.slug == article.slug) {
                Some(existing) => *existing = article,
                None => inner.cached.push(article),
            }
        }
    }

    /// Advisory staleness check: true until the first `set_articles`,
    /// then again once [`CACHE_TTL`] has elapsed since the last one.
    pub fn should_refresh(&self) -> bool {
        match self.inner.lock() {
            Ok(inner) => inner
                .last_fetch
                .map_or(true, |stamp| stamp.elapsed() > CACHE_TTL),
            Err(_) => true,
        }
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}
