//! Page metadata: titles, canonical URLs, social tags and JSON-LD.
//!
//! Every page gets a `PageMeta` describing what a crawler should see. The
//! structured-data blocks are plain `serde_json::Value`s built with `json!`.

use log::warn;
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::SiteConfig;
use crate::content::{Article, ArticleRepository};
use crate::site::route::Route;

const BLOG_DESCRIPTION: &str = "Expert insights on commercial roofing systems, maintenance best practices, and cutting-edge restoration technologies from the Verrazano Roofing team.";
const NOT_FOUND_DESCRIPTION: &str = "The page you're looking for doesn't exist.";

/// Fixed breadcrumb labels by path.
const BREADCRUMB_NAMES: &[(&str, &str)] = &[("/", "Home"), ("/blog", "Blog")];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  URLs and breadcrumbs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Absolute URL for a site path.
pub fn absolute_url(config: &SiteConfig, path: &str) -> String {
    match Url::parse(&config.base_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(err) => {
            warn!("cannot join `{path}` onto `{}`: {err}", config.base_url);
            format!("{}{}", config.base_url, path)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

/// `"roof-repair-tips"` → `"Roof Repair Tips"`.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_is_word = false;
    for ch in segment.chars().map(|c| if c == '-' { ' ' } else { c }) {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

/// Home plus one crumb per path segment.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
        label: "Home".into(),
        href: "/".into(),
    }];
    let mut href = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        let label = BREADCRUMB_NAMES
            .iter()
            .find(|(p, _)| *p == href)
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| title_case(segment));
        crumbs.push(Breadcrumb {
            label,
            href: href.clone(),
        });
    }
    crumbs
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  JSON-LD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn organization_json_ld(config: &SiteConfig) -> Value {
    let addr = &config.address;
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config.site_name,
        "url": config.base_url,
        "logo": config.logo_url,
        "description": config.organization_description,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": addr.street,
            "addressLocality": addr.locality,
            "addressRegion": addr.region,
            "postalCode": addr.postal_code,
            "addressCountry": addr.country,
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": config.telephone,
            "contactType": "customer service",
        },
        "sameAs": config.same_as,
    })
}

pub fn website_json_ld(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site_name,
        "url": config.base_url,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/blog?q={{search_term_string}}", config.base_url),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn breadcrumb_json_ld(config: &SiteConfig, crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.label,
                "item": absolute_url(config, &crumb.href),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn article_json_ld(config: &SiteConfig, article: &Article) -> Value {
    let date = article.iso_date();
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.excerpt,
        "image": article.featured_image,
        "datePublished": date,
        "dateModified": date,
        "author": { "@type": "Person", "name": article.author },
        "publisher": {
            "@type": "Organization",
            "name": config.site_name,
            "logo": { "@type": "ImageObject", "url": config.logo_url },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": absolute_url(config, &article.path()),
        },
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PageMeta
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleMeta {
    pub author: String,
    pub published_time: String,
    pub modified_time: Option<String>,
    pub tags: Vec<String>,
}

/// `<meta name=…>` or `<meta property=…>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetaAttr {
    Name,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: &str) -> Self {
        Self { attr: MetaAttr::Name, key: key.into(), content: content.into() }
    }

    fn property(key: &str, content: &str) -> Self {
        Self { attr: MetaAttr::Property, key: key.into(), content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    /// Page's own title; `None` uses the site default.
    pub title: Option<String>,
    pub description: String,
    pub image: String,
    /// Site path, e.g. `/blog`.
    pub path: String,
    pub og_type: &'static str,
    pub article: Option<ArticleMeta>,
    pub json_ld: Vec<Value>,
}

impl PageMeta {
    fn base(config: &SiteConfig, title: Option<&str>, description: Option<&str>, path: &str) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.unwrap_or(config.default_description.as_str()).to_string(),
            image: config.default_image.clone(),
            path: path.to_string(),
            og_type: "website",
            article: None,
            json_ld: Vec::new(),
        }
    }

    pub fn home(config: &SiteConfig) -> Self {
        let mut meta = Self::base(config, None, None, "");
        meta.json_ld = vec![organization_json_ld(config), website_json_ld(config)];
        meta
    }

    pub fn blog(config: &SiteConfig) -> Self {
        let mut meta = Self::base(config, Some("Blog"), Some(BLOG_DESCRIPTION), "/blog");
        meta.json_ld = vec![breadcrumb_json_ld(config, &breadcrumbs("/blog"))];
        meta
    }

    pub fn article(config: &SiteConfig, article: &Article) -> Self {
        let path = article.path();
        let mut meta = Self::base(config, Some(&article.title), Some(&article.excerpt), &path);
        meta.image = article.featured_image.clone();
        meta.og_type = "article";
        meta.article = Some(ArticleMeta {
            author: article.author.clone(),
            published_time: article.iso_date(),
            modified_time: None,
            tags: article.tags.clone(),
        });
        meta.json_ld = vec![
            article_json_ld(config, article),
            breadcrumb_json_ld(config, &breadcrumbs(&path)),
        ];
        meta
    }

    pub fn not_found(config: &SiteConfig, path: &str) -> Self {
        Self::base(config, Some("Page Not Found"), Some(NOT_FOUND_DESCRIPTION), path)
    }

    /// Unknown article slug under `/blog/`.
    pub fn article_not_found(config: &SiteConfig, slug: &str) -> Self {
        Self::base(config, Some("Article Not Found"), Some(NOT_FOUND_DESCRIPTION), &format!("/blog/{slug}"))
    }

    pub fn for_route(config: &SiteConfig, route: &Route, repo: &ArticleRepository) -> Self {
        match route {
            Route::Home => Self::home(config),
            Route::Blog => Self::blog(config),
            Route::Article(slug) => match repo.by_slug(slug) {
                Some(article) => Self::article(config, article),
                None => Self::article_not_found(config, slug),
            },
            Route::NotFound(path) => Self::not_found(config, path),
        }
    }

    /// `"{title} | {site}"`, or the site's default title.
    pub fn full_title(&self, config: &SiteConfig) -> String {
        match &self.title {
            Some(title) => format!("{title} | {}", config.site_name),
            None => config.default_title(),
        }
    }

    pub fn canonical_url(&self, config: &SiteConfig) -> String {
        absolute_url(config, &self.path)
    }

    /// Description, Open Graph, Twitter card and article tags, in that order.
    pub fn meta_tags(&self, config: &SiteConfig) -> Vec<MetaTag> {
        let title = self.full_title(config);
        let url = self.canonical_url(config);
        let mut tags = vec![
            MetaTag::name("description", &self.description),
            MetaTag::property("og:title", &title),
            MetaTag::property("og:description", &self.description),
            MetaTag::property("og:image", &self.image),
            MetaTag::property("og:url", &url),
            MetaTag::property("og:type", self.og_type),
            MetaTag::property("og:site_name", &config.site_name),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", &title),
            MetaTag::name("twitter:description", &self.description),
            MetaTag::name("twitter:image", &self.image),
        ];
        if let Some(article) = &self.article {
            tags.push(MetaTag::property("article:author", &article.author));
            tags.push(MetaTag::property("article:published_time", &article.published_time));
            if let Some(modified) = &article.modified_time {
                tags.push(MetaTag::property("article:modified_time", modified));
            }
            tags.extend(article.tags.iter().map(|t| MetaTag::property("article:tag", t)));
        }
        tags
    }

    /// Serialized `application/ld+json` payloads.
    pub fn json_ld_scripts(&self) -> Vec<String> {
        self.json_ld.iter().map(Value::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn titles() {
        assert_eq!(
            PageMeta::home(&cfg()).full_title(&cfg()),
            "Verrazano Roofing | Premium Commercial Roofing Solutions"
        );
        assert_eq!(PageMeta::blog(&cfg()).full_title(&cfg()), "Blog | Verrazano Roofing");
        assert_eq!(
            PageMeta::not_found(&cfg(), "/x").full_title(&cfg()),
            "Page Not Found | Verrazano Roofing"
        );
    }

    #[test]
    fn canonical_urls() {
        assert_eq!(PageMeta::blog(&cfg()).canonical_url(&cfg()), "https://verrazanoroofing.com/blog");
        assert_eq!(PageMeta::home(&cfg()).canonical_url(&cfg()), "https://verrazanoroofing.com/");
    }

    #[test]
    fn breadcrumb_labels() {
        let crumbs = breadcrumbs("/blog/seasonal-roof-maintenance-checklist");
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Blog", "Seasonal Roof Maintenance Checklist"]);
        assert_eq!(crumbs[2].href, "/blog/seasonal-roof-maintenance-checklist");
        assert_eq!(breadcrumbs("/").len(), 1);
        assert_eq!(title_case("a.b-c_d"), "A.B C_d");
    }

    #[test]
    fn breadcrumb_list_positions() {
        let ld = breadcrumb_json_ld(&cfg(), &breadcrumbs("/blog"));
        assert_eq!(ld["itemListElement"][0]["position"], 1);
        assert_eq!(ld["itemListElement"][1]["name"], "Blog");
        assert_eq!(ld["itemListElement"][1]["item"], "https://verrazanoroofing.com/blog");
    }

    #[test]
    fn article_json_ld_fields() {
        let repo = ArticleRepository::builtin().unwrap();
        let article = repo.by_slug("liquid-applied-coatings-ultimate-guide").unwrap();
        let ld = article_json_ld(&cfg(), article);
        assert_eq!(ld["@type"], "Article");
        assert_eq!(ld["headline"], "Liquid-Applied Coatings: The Future of Roof Restoration");
        assert_eq!(ld["datePublished"], "2026-02-15");
        assert_eq!(ld["dateModified"], "2026-02-15");
        assert_eq!(ld["author"]["name"], "Verrazano Editorial");
        assert_eq!(ld["publisher"]["logo"]["url"], "https://verrazanoroofing.com/logo.png");
        assert_eq!(
            ld["mainEntityOfPage"]["@id"],
            "https://verrazanoroofing.com/blog/liquid-applied-coatings-ultimate-guide"
        );
    }

    #[test]
    fn article_meta_tags() {
        let repo = ArticleRepository::builtin().unwrap();
        let meta = PageMeta::for_route(
            &cfg(),
            &Route::Article("liquid-applied-coatings-ultimate-guide".into()),
            &repo,
        );
        let tags = meta.meta_tags(&cfg());
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.as_str());
        assert_eq!(find("og:type"), Some("article"));
        assert_eq!(find("og:image"), Some("https://picsum.photos/seed/liquid-coat/1200/630"));
        assert_eq!(tags.iter().filter(|t| t.key == "article:tag").count(), 4);
        assert!(find("article:modified_time").is_none());
        assert_eq!(meta.json_ld_scripts().len(), 2);
    }

    #[test]
    fn missing_article_meta() {
        let repo = ArticleRepository::builtin().unwrap();
        let meta = PageMeta::for_route(&cfg(), &Route::Article("gone".into()), &repo);
        assert_eq!(meta.full_title(&cfg()), "Article Not Found | Verrazano Roofing");
        assert!(meta.json_ld.is_empty());
    }

    #[test]
    fn home_structured_data() {
        let meta = PageMeta::home(&cfg());
        assert_eq!(meta.json_ld[0]["address"]["postalCode"], "11209");
        assert_eq!(meta.json_ld[0]["sameAs"].as_array().map(Vec::len), Some(3));
        assert_eq!(
            meta.json_ld[1]["potentialAction"]["target"],
            "https://verrazanoroofing.com/blog?q={search_term_string}"
        );
    }
}
