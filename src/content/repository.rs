//! Content repository - read-only queries over the loaded collections

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use std::collections::HashSet;
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::source::DataSource;
use super::{Article, Event, Photo, SiteConfig};
use crate::error::{ContentError, Result};

/// Number of articles returned by [`ContentRepository::recent_articles`] on the homepage
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Articles, photos, events and site configuration, loaded once
///
/// Collections keep source order. Clones share the same storage; every
/// query hands out owned copies.
#[derive(Clone)]
pub struct ContentRepository {
    articles: Arc<[Article]>,
    photos: Arc<[Photo]>,
    events: Arc<[Event]>,
    site_config: Arc<SiteConfig>,
    clock: Arc<dyn Clock>,
}

impl ContentRepository {
    /// Load every collection from `source`, reading the wall clock for date queries
    pub fn load<S: DataSource + ?Sized>(source: &S) -> Result<Self> {
        Self::load_with_clock(source, Arc::new(SystemClock))
    }

    /// Load every collection from `source` with an explicit clock
    pub fn load_with_clock<S: DataSource + ?Sized>(
        source: &S,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let articles = source.load_articles()?;
        let photos = source.load_photos()?;
        let events = source.load_events()?;
        let site_config = source.load_site_config()?;

        check_slugs(&articles)?;

        tracing::info!(
            "Loaded {} articles, {} photos and {} events",
            articles.len(),
            photos.len(),
            events.len()
        );

        Ok(Self {
            articles: articles.into(),
            photos: photos.into(),
            events: events.into(),
            site_config: Arc::new(site_config),
            clock,
        })
    }

    /// All articles, drafts included
    pub fn articles(&self) -> Vec<Article> {
        self.articles.to_vec()
    }

    /// The article with exactly this slug, published or not
    pub fn article_by_slug(&self, slug: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.slug == slug).cloned()
    }

    /// The article with this slug, only if it is published
    pub fn published_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.article_by_slug(slug).filter(|a| a.published)
    }

    pub fn published_articles(&self) -> Vec<Article> {
        self.articles.iter().filter(|a| a.published).cloned().collect()
    }

    /// Published articles, newest first, at most `limit` of them
    pub fn recent_articles(&self, limit: usize) -> Vec<Article> {
        let mut articles = self.published_articles();
        // Stable: equal dates keep source order
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles.truncate(limit);
        articles
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.photos.to_vec()
    }

    pub fn photos_by_category(&self, category: &str) -> Vec<Photo> {
        self.photos
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    /// Distinct non-empty photo categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        self.photos
            .iter()
            .filter_map(Photo::category)
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.to_vec()
    }

    /// Events at or after the clock's current time, soonest first
    pub fn upcoming_events(&self) -> Vec<Event> {
        self.upcoming_events_at(self.clock.now())
    }

    /// Events at or after `now`, soonest first
    pub fn upcoming_events_at(&self, now: DateTime<Utc>) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.date >= now)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }

    pub fn site_config(&self) -> SiteConfig {
        self.site_config.as_ref().clone()
    }

    /// Current time as seen by this repository's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// Reject duplicate slugs, warn about slugs that are not URL-safe
fn check_slugs(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::new();
    for article in articles {
        if !seen.insert(article.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(article.slug.clone()));
        }
        if slug::slugify(&article.slug) != article.slug {
            tracing::warn!(
                "Article {} has a slug that is not URL-safe: {:?}",
                article.id,
                article.slug
            );
        }
    }
    Ok(())
}
