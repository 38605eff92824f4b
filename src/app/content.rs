//! Content-area rendering for `SiteApp`.
//!
//! - `draw_content`    routes the central panel to the page for `self.route`
//! - `draw_meta_panel` right-side panel listing the page's SEO metadata

use eframe::egui;
use log::warn;

use verrazano_site::site::seo::MetaAttr;
use verrazano_site::site::Route;

use super::SiteApp;
use crate::ui;

impl SiteApp {
    /// Draw the current page inside a vertical scroll area.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut scroll = egui::ScrollArea::vertical()
            .id_salt(self.route.path())
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_reset) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let mut navigate_to: Option<Route> = None;
        let mut clicked_link: Option<String> = None;
        let now = self.now;
        let repo = self.repo;

        scroll.show(ui, |ui| {
            let viewport = ui.clip_rect();
            ui.set_max_width(ui.available_width().min(1100.0));
            match self.route.clone() {
                Route::Home => self.home.show(ui, viewport, now, repo, &mut navigate_to),
                Route::Blog => self.draw_blog_index(ui, &mut navigate_to),
                Route::Article(slug) => {
                    self.draw_article(ui, &slug, &mut navigate_to, &mut clicked_link)
                }
                Route::NotFound(_) => self.draw_not_found(ui, &mut navigate_to),
            }
            draw_footer(ui, self);
        });

        if let Some(href) = clicked_link {
            self.follow_link(&href, ctx);
        }
        if let Some(route) = navigate_to {
            self.navigate(route, ctx);
        }
    }

    /// Title, canonical URL, meta tags and JSON-LD for the current page.
    pub fn draw_meta_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Page Info");
        ui.separator();
        ui.label(format!("Title: {}", self.meta.full_title(&self.config)));
        ui.label(format!("Canonical: {}", self.meta.canonical_url(&self.config)));

        ui.separator();
        ui.heading("Meta Tags");
        egui::ScrollArea::vertical()
            .id_salt("meta-tags")
            .max_height(260.0)
            .show(ui, |ui| {
                egui::Grid::new("meta-tag-grid").striped(true).show(ui, |ui| {
                    for tag in self.meta.meta_tags(&self.config) {
                        let attr = match tag.attr {
                            MetaAttr::Name => "name",
                            MetaAttr::Property => "property",
                        };
                        ui.label(egui::RichText::new(format!("{attr}={}", tag.key)).monospace());
                        ui.label(ui::truncate_str(&tag.content, 60));
                        ui.end_row();
                    }
                });
            });

        ui.separator();
        ui.heading("Structured Data");
        egui::ScrollArea::vertical()
            .id_salt("json-ld")
            .show(ui, |ui| {
                for block in &self.meta.json_ld {
                    match serde_json::to_string_pretty(block) {
                        Ok(text) => {
                            ui.label(egui::RichText::new(text).monospace().size(11.0));
                        }
                        Err(err) => warn!("unprintable JSON-LD block: {err}"),
                    }
                    ui.add_space(6.0);
                }
            });
    }
}

fn draw_footer(ui: &mut egui::Ui, app: &SiteApp) {
    ui.add_space(32.0);
    ui.separator();
    let address = &app.config.address;
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(&app.config.site_name).strong());
        ui.label(
            egui::RichText::new(format!(
                "{}, {}, {} {}",
                address.street, address.locality, address.region, address.postal_code
            ))
            .color(ui::MUTED),
        );
        ui.label(egui::RichText::new(&app.config.telephone).color(ui::MUTED));
    });
    ui.add_space(16.0);
}
