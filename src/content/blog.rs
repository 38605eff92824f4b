//! Blog index state: category filter and "load more" pagination.

use log::debug;

use super::{Article, ArticleRepository};

pub const ARTICLES_PER_PAGE: usize = 6;

#[derive(Debug, Clone)]
pub struct BlogIndex<'a> {
    repo: &'a ArticleRepository,
    category: Option<String>,
    page: usize,
}

impl<'a> BlogIndex<'a> {
    pub fn new(repo: &'a ArticleRepository) -> Self {
        Self {
            repo,
            category: None,
            page: 1,
        }
    }

    pub fn categories(&self) -> Vec<&'a str> {
        self.repo.categories()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Switch filter (`None` = all). Always returns to the first page.
    pub fn set_category(&mut self, category: Option<&str>) {
        debug!("blog: category filter {:?}", category);
        self.category = category.map(str::to_string);
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filtered(&self) -> Vec<&'a Article> {
        match &self.category {
            Some(c) => self.repo.by_category(c),
            None => self.repo.all().iter().collect(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(ARTICLES_PER_PAGE)
    }

    /// First `page × 6` filtered articles.
    pub fn visible(&self) -> Vec<&'a Article> {
        let mut all = self.filtered();
        all.truncate(self.page * ARTICLES_PER_PAGE);
        all
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.filtered().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ArticleSource;

    fn many(n: usize) -> ArticleRepository {
        let articles = (0..n)
            .map(|i| {
                let slug: &'static str = Box::leak(format!("post-{i}").into_boxed_str());
                let date: &'static str = Box::leak(format!("2026-01-{:02}", i + 1).into_boxed_str());
                Article::from_source(&ArticleSource {
                    slug,
                    title: slug,
                    excerpt: "",
                    date,
                    author: "Verrazano Editorial",
                    category: if i % 2 == 0 { "Even" } else { "Odd" },
                    tags: &[],
                    featured_image: "",
                    content: "Body.",
                })
                .unwrap()
            })
            .collect();
        ArticleRepository::new(articles).unwrap()
    }

    #[test]
    fn paginates_by_six() {
        let repo = many(14);
        let mut blog = BlogIndex::new(&repo);
        assert_eq!(blog.total_pages(), 3);
        assert_eq!(blog.visible().len(), 6);
        assert!(blog.load_more());
        assert_eq!(blog.visible().len(), 12);
        assert!(blog.load_more());
        assert_eq!(blog.visible().len(), 14);
        assert!(!blog.has_more());
        assert!(!blog.load_more());
        assert_eq!(blog.visible()[0].slug, "post-13");
    }

    #[test]
    fn filter_resets_page() {
        let repo = many(14);
        let mut blog = BlogIndex::new(&repo);
        blog.load_more();
        blog.set_category(Some("Odd"));
        assert_eq!(blog.page(), 1);
        assert_eq!(blog.visible().len(), 6);
        assert!(blog.visible().iter().all(|a| a.category == "Odd"));
        assert_eq!(blog.total_pages(), 2);
        blog.set_category(Some("Missing"));
        assert!(blog.is_empty());
        assert!(!blog.has_more());
        blog.set_category(None);
        assert_eq!(blog.filtered().len(), 14);
    }

    #[test]
    fn builtin_fits_one_page() {
        let repo = ArticleRepository::builtin().unwrap();
        let blog = BlogIndex::new(&repo);
        assert_eq!(blog.visible().len(), 3);
        assert!(!blog.has_more());
        assert_eq!(blog.categories(), vec!["Commercial", "Technology", "Maintenance"]);
    }
}
