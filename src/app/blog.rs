//! Blog pages for `SiteApp`: index, article detail and not-found.

use eframe::egui;

use verrazano_site::content::{Article, Block};
use verrazano_site::site::{breadcrumbs, Route};

use super::SiteApp;
use crate::ui;

/// Related articles shown under an article.
const RELATED_LIMIT: usize = 3;

impl SiteApp {
    pub fn draw_blog_index(&mut self, ui: &mut egui::Ui, navigate_to: &mut Option<Route>) {
        ui.add_space(24.0);
        draw_breadcrumbs(ui, "/blog", navigate_to);
        ui::section_heading(ui, "Insights", "Roofing knowledge, from the field.");

        // Category filter
        ui.horizontal_wrapped(|ui| {
            if ui.selectable_label(self.blog.category().is_none(), "All").clicked() {
                self.blog.set_category(None);
            }
            for category in self.blog.categories() {
                let active = self.blog.category() == Some(category);
                if ui.selectable_label(active, category).clicked() {
                    self.blog.set_category(Some(category));
                }
            }
        });
        ui.add_space(16.0);

        if self.blog.is_empty() {
            ui.colored_label(ui::MUTED, "No articles in this category yet.");
            return;
        }
        for article in self.blog.visible() {
            draw_card(ui, article, navigate_to);
            ui.add_space(12.0);
        }
        if self.blog.has_more() && ui.button("Load More Articles").clicked() {
            self.blog.load_more();
        }
        ui.label(
            egui::RichText::new(format!("Page {} of {}", self.blog.page(), self.blog.total_pages()))
                .small()
                .color(ui::MUTED),
        );
    }

    pub fn draw_article(
        &mut self,
        ui: &mut egui::Ui,
        slug: &str,
        navigate_to: &mut Option<Route>,
        clicked_link: &mut Option<String>,
    ) {
        let repo = self.repo;
        let (Some(article), Some(view)) = (repo.by_slug(slug), self.article.as_mut()) else {
            draw_missing(
                ui,
                "Article Not Found",
                "The article you're looking for doesn't exist or has been moved.",
                "Back to Blog",
                Route::Blog,
                navigate_to,
            );
            return;
        };

        ui.add_space(24.0);
        draw_breadcrumbs(ui, &article.path(), navigate_to);
        ui.label(egui::RichText::new(article.category.to_uppercase()).size(12.0).color(ui::ACCENT));
        ui.heading(egui::RichText::new(&article.title).size(34.0).strong());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&article.author).strong());
            ui.label(egui::RichText::new(article.long_date()).color(ui::MUTED));
            ui.label(egui::RichText::new(format!("{} min read", article.read_minutes())).color(ui::MUTED));
        });
        ui.add_space(16.0);

        // Table of contents
        if !view.headings.is_empty() {
            egui::CollapsingHeader::new("Table of Contents")
                .default_open(true)
                .show(ui, |ui| {
                    for heading in &view.headings {
                        ui.horizontal(|ui| {
                            ui.add_space(if heading.level > 2 { 16.0 } else { 0.0 });
                            let entry = ui.add(
                                egui::Label::new(egui::RichText::new(&heading.text).color(ui::LINK))
                                    .sense(egui::Sense::click()),
                            );
                            if entry.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                                view.pending_anchor = Some(heading.anchor_id.clone());
                            }
                        });
                    }
                });
            ui.add_space(16.0);
        }

        let target = view.pending_anchor.take();
        for block in &view.document.blocks {
            let response = ui::render_block(ui, block, clicked_link);
            if let (Some(response), Block::Heading { anchor, .. }) = (response, block) {
                if target.as_deref() == Some(anchor.as_str()) {
                    response.scroll_to_me(Some(egui::Align::TOP));
                }
            }
        }

        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            for tag in &article.tags {
                ui.label(egui::RichText::new(format!("#{tag}")).color(ui::MUTED));
            }
        });

        let related = repo.related(&view.slug, RELATED_LIMIT);
        if !related.is_empty() {
            ui.add_space(24.0);
            ui.separator();
            ui.heading("Related Articles");
            ui.add_space(8.0);
            for other in related {
                draw_card(ui, other, navigate_to);
                ui.add_space(8.0);
            }
        }
    }

    pub fn draw_not_found(&mut self, ui: &mut egui::Ui, navigate_to: &mut Option<Route>) {
        draw_missing(
            ui,
            "Page Not Found",
            "The page you're looking for doesn't exist or has been moved.",
            "Back to Home",
            Route::Home,
            navigate_to,
        );
    }
}

fn draw_card(ui: &mut egui::Ui, article: &Article, navigate_to: &mut Option<Route>) {
    let card = egui::Frame::none()
        .fill(ui::SURFACE)
        .inner_margin(14.0)
        .rounding(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&article.category).small().color(ui::ACCENT));
                ui.label(egui::RichText::new(article.short_date()).small().color(ui::MUTED));
                ui.label(
                    egui::RichText::new(format!("{} min read", article.read_minutes()))
                        .small()
                        .color(ui::MUTED),
                );
            });
            ui.label(egui::RichText::new(&article.title).size(19.0).strong());
            ui.label(ui::truncate_str(&article.excerpt, 180));
        })
        .response
        .interact(egui::Sense::click());
    if card.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
        *navigate_to = Some(Route::Article(article.slug.clone()));
    }
}

/// Breadcrumb trail; hidden on the home page where it is a single crumb.
fn draw_breadcrumbs(ui: &mut egui::Ui, path: &str, navigate_to: &mut Option<Route>) {
    let crumbs = breadcrumbs(path);
    if crumbs.len() < 2 {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        let last = crumbs.len() - 1;
        for (i, crumb) in crumbs.iter().enumerate() {
            if i == last {
                ui.label(egui::RichText::new(&crumb.label).color(ui::MUTED));
            } else {
                if ui.link(crumb.label.as_str()).clicked() {
                    *navigate_to = Some(Route::parse(&crumb.href));
                }
                ui.label("/");
            }
        }
    });
    ui.add_space(8.0);
}

fn draw_missing(
    ui: &mut egui::Ui,
    title: &str,
    message: &str,
    back_label: &str,
    back_to: Route,
    navigate_to: &mut Option<Route>,
) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("404").size(72.0).strong().color(ui::ACCENT));
        ui.heading(egui::RichText::new(title).size(28.0));
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(16.0);
        if ui.button(back_label).clicked() {
            *navigate_to = Some(back_to);
        }
    });
}
