//! Path → page routing.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Route {
    #[default]
    Home,
    Blog,
    /// `/blog/:slug`. The slug may not exist; the article page decides.
    Article(String),
    /// Catch-all, carrying the requested path.
    NotFound(String),
}

impl Route {
    /// Query strings and fragments are ignored; one trailing slash is allowed.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [""] => Route::Home,
            ["blog"] => Route::Blog,
            ["blog", slug] if !slug.is_empty() => Route::Article((*slug).to_string()),
            _ if trimmed.is_empty() => Route::Home,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::Article(slug) => format!("/blog/{slug}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_blog_section(&self) -> bool {
        matches!(self, Route::Blog | Route::Article(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/blog"), Route::Blog);
        assert_eq!(Route::parse("/blog/"), Route::Blog);
        assert_eq!(Route::parse("/blog?page=2"), Route::Blog);
        assert_eq!(
            Route::parse("/blog/liquid-applied-coatings-ultimate-guide#the-application-process"),
            Route::Article("liquid-applied-coatings-ultimate-guide".into())
        );
    }

    #[test]
    fn everything_else_is_not_found() {
        assert_eq!(Route::parse("/about"), Route::NotFound("/about".into()));
        assert_eq!(Route::parse("/blog/a/b"), Route::NotFound("/blog/a/b".into()));
        assert_eq!(Route::parse("blog"), Route::NotFound("blog".into()));
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Blog,
            Route::Article("seasonal-roof-maintenance-checklist".into()),
            Route::NotFound("/missing".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
