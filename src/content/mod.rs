//! Blog content: article records, markdown rendering, repository, pagination.
//!
//! Articles are static data compiled into the binary. They are parsed and
//! validated once (dates, slugs, heading outlines) and then only read.

pub mod articles;
pub mod markdown;
pub mod document;
pub mod repository;
pub mod blog;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

pub use blog::BlogIndex;
pub use document::{ArticleDocument, Block, Span};
pub use markdown::{extract_headings, render, render_article, slugify, verify_outline, HeadingEntry, RenderedArticle};
pub use repository::ArticleRepository;

/// Average reading speed used for the "N min read" label.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("duplicate article slug `{0}`")]
    DuplicateSlug(String),

    #[error("article slug `{0}` is not URL-safe")]
    InvalidSlug(String),

    #[error("article `{slug}` has an invalid date `{value}`: {source}")]
    InvalidDate {
        slug: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("heading outline mismatch: rendered {rendered:?}, source {extracted:?}")]
    OutlineMismatch {
        rendered: Vec<String>,
        extracted: Vec<String>,
    },
}

/// Raw article record as written in the data table.
#[derive(Debug, Clone, Copy)]
pub struct ArticleSource {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub featured_image: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: String,
    pub content: String,
}

impl Article {
    pub fn from_source(src: &ArticleSource) -> Result<Self, ContentError> {
        let date = NaiveDate::parse_from_str(src.date, "%Y-%m-%d").map_err(|source| {
            ContentError::InvalidDate {
                slug: src.slug.to_string(),
                value: src.date.to_string(),
                source,
            }
        })?;
        Ok(Self {
            slug: src.slug.to_string(),
            title: src.title.to_string(),
            excerpt: src.excerpt.to_string(),
            date,
            author: src.author.to_string(),
            category: src.category.to_string(),
            tags: src.tags.iter().map(|t| t.to_string()).collect(),
            featured_image: src.featured_image.to_string(),
            content: src.content.to_string(),
        })
    }

    /// Whitespace-separated words in the markdown source.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// `ceil(words / 200)`, never below one minute.
    pub fn read_minutes(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// ISO date, as used in structured data.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// "February 20, 2026".
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// "Feb 20, 2026".
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn shares_tags_with(&self, other: &Article) -> usize {
        self.tags.iter().filter(|t| other.tags.contains(t)).count()
    }
}

/// Parse every built-in article.
pub fn builtin_articles() -> Result<Vec<Article>, ContentError> {
    articles::BUILTIN_ARTICLES.iter().map(Article::from_source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date: &'static str, content: &'static str) -> ArticleSource {
        ArticleSource {
            slug: "sample",
            title: "Sample",
            excerpt: "",
            date,
            author: "Verrazano Editorial",
            category: "Maintenance",
            tags: &["a", "b"],
            featured_image: "",
            content,
        }
    }

    #[test]
    fn builtins_parse() {
        let all = builtin_articles().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].long_date(), "February 20, 2026");
        assert_eq!(all[1].short_date(), "Feb 15, 2026");
    }

    #[test]
    fn rejects_bad_date() {
        let err = Article::from_source(&sample("2026-02-30", "")).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { .. }));
    }

    #[test]
    fn read_minutes_round_up() {
        let words = ["word "; 201].concat();
        let text: &'static str = Box::leak(words.into_boxed_str());
        let a = Article::from_source(&sample("2026-01-01", text)).unwrap();
        assert_eq!(a.word_count(), 201);
        assert_eq!(a.read_minutes(), 2);

        let empty = Article::from_source(&sample("2026-01-01", "")).unwrap();
        assert_eq!(empty.read_minutes(), 1);
    }
}
