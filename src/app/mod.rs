//! `SiteApp`: the top-level egui application state.
//!
//! This module declares the `SiteApp` struct, its constructor and the
//! `eframe::App` frame loop. Drawing is split across the sibling modules:
//!
//! - `navigation` routes and history
//! - `toolbar`    back/forward, address field, site links
//! - `content`    page dispatch and the metadata side panel
//! - `home`       home page sections and their motion state
//! - `blog`       blog index, article detail, not-found pages

pub mod navigation;
pub mod toolbar;
pub mod content;
pub mod home;
pub mod blog;

use eframe::egui;
use log::debug;
use thiserror::Error;

use verrazano_site::content::{ArticleDocument, ArticleRepository, BlogIndex, ContentError, HeadingEntry};
use verrazano_site::site::{PageMeta, Route};
use verrazano_site::SiteConfig;

use home::{HomeError, HomePage};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("article data rejected: {0}")]
    Content(#[from] ContentError),
    #[error("home page configuration rejected: {0}")]
    Home(#[from] HomeError),
}

/// Rendered form of the article currently on screen.
pub struct ArticleView {
    pub slug: String,
    pub headings: Vec<HeadingEntry>,
    pub document: ArticleDocument,
    /// Table-of-contents target to scroll to on the next frame.
    pub pending_anchor: Option<String>,
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct SiteApp {
    pub config: SiteConfig,
    pub repo: &'static ArticleRepository,
    pub route: Route,
    pub meta: PageMeta,
    pub address: String,
    // History (back / forward)
    pub history: Vec<Route>,
    pub history_idx: usize,
    pub home: HomePage,
    pub blog: BlogIndex<'static>,
    pub article: Option<ArticleView>,
    pub show_meta: bool,
    /// Set on navigation so the next frame starts at the top of the page.
    pub scroll_reset: bool,
    /// Seconds since start, from egui's input clock.
    pub now: f32,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Result<Self, StartupError> {
        let repo = ArticleRepository::shared()?;
        let home = HomePage::new(config.rates)?;
        let route = Route::Home;
        let meta = PageMeta::for_route(&config, &route, repo);
        debug!("site app ready with {} article(s)", repo.len());
        Ok(Self {
            address: route.path(),
            history: vec![route.clone()],
            history_idx: 0,
            route,
            meta,
            home,
            blog: BlogIndex::new(repo),
            article: None,
            show_meta: false,
            scroll_reset: false,
            now: 0.0,
            repo,
            config,
        })
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (time, dt) = ctx.input(|i| (i.time, i.stable_dt));
        self.now = time as f32;
        if matches!(self.route, Route::Home) {
            self.home.tick(dt);
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        // Metadata side panel
        if self.show_meta {
            egui::SidePanel::right("meta")
                .default_width(320.0)
                .show(ctx, |ui| {
                    self.draw_meta_panel(ui);
                });
        }

        // Main content area
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, &ctx_clone);
        });

        let moved = matches!(self.route, Route::Home) && self.home.flush();
        if moved || (matches!(self.route, Route::Home) && self.home.is_animating(self.now)) {
            ctx.request_repaint();
        }
    }
}
