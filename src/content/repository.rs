//! Read-only article store.
//!
//! Built once from static data, sorted newest first, then shared. No query
//! mutates it.

use std::collections::HashSet;

use log::{debug, warn};
use once_cell::sync::OnceCell;

use super::markdown::verify_outline;
use super::{builtin_articles, Article, ContentError};

static SHARED: OnceCell<ArticleRepository> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRepository {
    articles: Vec<Article>,
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl ArticleRepository {
    /// Validate and sort. Equal dates keep their input order.
    pub fn new(mut articles: Vec<Article>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !is_url_safe(&article.slug) {
                return Err(ContentError::InvalidSlug(article.slug.clone()));
            }
            if !seen.insert(article.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(article.slug.clone()));
            }
            if let Err(err) = verify_outline(&article.content) {
                warn!("article `{}`: {err}", article.slug);
                return Err(err);
            }
        }
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        debug!("article repository ready with {} articles", articles.len());
        Ok(Self { articles })
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(builtin_articles()?)
    }

    /// Process-wide repository of the built-in articles.
    pub fn shared() -> Result<&'static Self, ContentError> {
        SHARED.get_or_try_init(Self::builtin)
    }

    /// Newest first.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.category == category).collect()
    }

    /// Distinct categories in order of first appearance in `all()`.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .map(|a| a.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Up to `limit` other articles ranked by shared tags, ties in `all()`
    /// order. An unknown slug yields the first `limit` articles.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        let Some(current) = self.by_slug(slug) else {
            return self.articles.iter().take(limit).collect();
        };
        let mut others: Vec<(usize, &Article)> = self
            .articles
            .iter()
            .filter(|a| a.slug != slug)
            .map(|a| (a.shares_tags_with(current), a))
            .collect();
        others.sort_by(|a, b| b.0.cmp(&a.0));
        others.into_iter().take(limit).map(|(_, a)| a).collect()
    }

    pub fn latest(&self, n: usize) -> &[Article] {
        &self.articles[..n.min(self.articles.len())]
    }
}
