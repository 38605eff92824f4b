//! Navigation methods for `SiteApp`.
//!
//! Covers history management (`go_back`, `go_forward`, `navigate`) and the
//! per-route setup done on every page change (`enter_route`).

use eframe::egui;
use log::{debug, warn};

use verrazano_site::content::{render_article, ArticleDocument};
use verrazano_site::site::{PageMeta, Route};

use super::home::HomePage;
use super::{ArticleView, SiteApp};

impl SiteApp {
    /// Navigate one step back in history.
    pub fn go_back(&mut self, ctx: &egui::Context) {
        if self.history_idx > 0 {
            self.history_idx -= 1;
            let route = self.history[self.history_idx].clone();
            self.enter_route(route, ctx);
        }
    }

    /// Navigate one step forward in history.
    pub fn go_forward(&mut self, ctx: &egui::Context) {
        if self.history_idx + 1 < self.history.len() {
            self.history_idx += 1;
            let route = self.history[self.history_idx].clone();
            self.enter_route(route, ctx);
        }
    }

    /// Push `route` to history and show it.
    pub fn navigate(&mut self, route: Route, ctx: &egui::Context) {
        if self.history.is_empty() || self.history[self.history_idx] != route {
            // Truncate forward history before pushing
            self.history.truncate(self.history_idx + 1);
            self.history.push(route.clone());
            self.history_idx = self.history.len() - 1;
        }
        self.enter_route(route, ctx);
    }

    /// Parse the address field and navigate to it.
    pub fn navigate_to_address(&mut self, ctx: &egui::Context) {
        let route = Route::parse(self.address.trim());
        self.navigate(route, ctx);
    }

    /// Swap page state for `route` without touching history.
    pub fn enter_route(&mut self, route: Route, ctx: &egui::Context) {
        debug!("route {} -> {}", self.route, route);
        let leaving_home = matches!(self.route, Route::Home) && route != Route::Home;
        let entering_home = route == Route::Home && self.route != Route::Home;

        if leaving_home {
            self.home.unmount();
        }
        if entering_home {
            // Remount: reveals and counters play again.
            match HomePage::new(self.config.rates) {
                Ok(page) => self.home = page,
                Err(err) => warn!("keeping previous home page state: {err}"),
            }
        }

        self.article = match route {
            Route::Article(ref slug) => self.load_article(slug),
            _ => None,
        };
        if route == Route::Blog && self.route != Route::Blog {
            // Filter and page are transient.
            self.blog.set_category(None);
        }

        self.meta = PageMeta::for_route(&self.config, &route, self.repo);
        self.address = route.path();
        self.route = route;
        self.scroll_reset = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.meta.full_title(&self.config)));
    }

    fn load_article(&self, slug: &str) -> Option<ArticleView> {
        let article = self.repo.by_slug(slug)?;
        let rendered = render_article(&article.content);
        let document = ArticleDocument::parse(&rendered.html);
        debug!(
            "article `{slug}`: {} block(s), {} heading(s)",
            document.blocks.len(),
            rendered.headings.len()
        );
        Some(ArticleView {
            slug: article.slug.clone(),
            headings: rendered.headings,
            document,
            pending_anchor: None,
        })
    }

    /// Follow a link clicked inside page content. Site paths route in-process;
    /// anything else opens externally.
    pub fn follow_link(&mut self, href: &str, ctx: &egui::Context) {
        if let Some(anchor) = href.strip_prefix('#') {
            if let Some(view) = self.article.as_mut() {
                view.pending_anchor = Some(anchor.to_string());
            }
        } else if href.starts_with('/') {
            self.navigate(Route::parse(href), ctx);
        } else {
            ctx.open_url(egui::OpenUrl::new_tab(href));
        }
    }
}
