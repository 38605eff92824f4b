//! Home page: per-section motion state and drawing.
//!
//! Each frame a section reads the progress its tracker published last
//! frame, draws itself with the derived `VisualState`, then pushes its new
//! geometry. `HomePage::flush` publishes all of it once at the end of the
//! frame.

use eframe::egui;
use log::debug;
use thiserror::Error;

use verrazano_site::content::ArticleRepository;
use verrazano_site::motion::counter::CountUp;
use verrazano_site::motion::curve::CurveError;
use verrazano_site::motion::reveal::{Entrance, RevealOrchestrator, Stagger, ViewportMargin};
use verrazano_site::motion::scroll::{ScrollBinding, ScrollError, ScrollOffset, ScrollProgressTracker};
use verrazano_site::motion::spring::{Spring, SpringConfig};
use verrazano_site::motion::visual::VisualCurves;
use verrazano_site::site::home::{
    self, CALCULATOR_BENEFITS, EXPERTISE, FEATURED_PROJECT, HERO, LATEST_ARTICLES,
    PROCESS_ACTIVE_MARGIN, PROCESS_STEPS, PROCESS_STEP_OFFSETS, STATS, TESTIMONIALS,
    TRUST_BADGES, VALUES,
};
use verrazano_site::site::Route;
use verrazano_site::widgets::calculator::{AREA_MAX, AREA_MIN, AREA_STEP};
use verrazano_site::widgets::{CostRates, MagneticButton, OrbitError, OrbitSelector, RoiCalculator};
use verrazano_site::format::format_thousands;

use crate::ui;

/// Headline letters drop in from this many points below their rest line.
const LETTER_DROP: f32 = 40.0;
const ORBIT_SIZE: f32 = 420.0;
const ORBIT_RADIUS: f32 = 160.0;
const ORBIT_NODE_RADIUS: f32 = 38.0;

#[derive(Error, Debug)]
pub enum HomeError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Scroll(#[from] ScrollError),
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

pub struct HomePage {
    hero: ScrollProgressTracker,
    hero_text: VisualCurves,
    hero_letterbox: VisualCurves,
    /// One spring per headline line.
    headline: Vec<Spring>,
    cta: MagneticButton,

    steps: Vec<ScrollProgressTracker>,
    step_curves: VisualCurves,
    active_margin: ViewportMargin,
    active_step: usize,
    /// Set by the hero call to action; consumed by the process heading.
    jump_to_process: bool,

    values: RevealOrchestrator,
    orbit: OrbitSelector,
    expertise: Vec<ScrollProgressTracker>,
    expertise_parallax: VisualCurves,
    calculator: RoiCalculator,
    testimonials: RevealOrchestrator,
    stats: RevealOrchestrator,
    counters: Vec<CountUp>,
    latest: RevealOrchestrator,
}

impl HomePage {
    pub fn new(rates: CostRates) -> Result<Self, HomeError> {
        let step_binding = ScrollBinding::parse(&PROCESS_STEP_OFFSETS)?;
        let through = ScrollBinding::new(ScrollOffset::START_END, ScrollOffset::END_START);
        let mut headline: Vec<Spring> = HERO
            .headline
            .iter()
            .map(|_| Spring::new(SpringConfig::LETTER, LETTER_DROP))
            .collect();
        for line in &mut headline {
            line.set_target(0.0);
        }

        Ok(Self {
            hero: ScrollProgressTracker::new(ScrollBinding::new(
                ScrollOffset::START_START,
                ScrollOffset::END_START,
            )),
            hero_text: VisualCurves::hero_text()?,
            hero_letterbox: VisualCurves::hero_letterbox()?,
            headline,
            cta: MagneticButton::default(),

            steps: PROCESS_STEPS
                .iter()
                .map(|_| ScrollProgressTracker::new(step_binding.clone()))
                .collect(),
            step_curves: VisualCurves::process_step()?,
            active_margin: ViewportMargin::parse(PROCESS_ACTIVE_MARGIN),
            active_step: 0,
            jump_to_process: false,

            values: RevealOrchestrator::new(ViewportMargin::parse("-5%"), Entrance::blur_reveal())
                .with_stagger(Stagger::new(0.0, 0.15), VALUES.len()),
            orbit: home::orbit_selector()?,
            expertise: EXPERTISE
                .iter()
                .map(|_| ScrollProgressTracker::new(through.clone()))
                .collect(),
            expertise_parallax: VisualCurves::parallax(-20.0, 40.0)?,
            calculator: RoiCalculator::new(rates),
            testimonials: RevealOrchestrator::new(
                ViewportMargin::parse("-10%"),
                Entrance::fade_up(),
            )
            .with_stagger(Stagger::new(0.0, 0.1), TESTIMONIALS.len()),
            stats: RevealOrchestrator::new(ViewportMargin::parse("-20%"), Entrance::fade_up())
                .with_stagger(Stagger::new(0.0, 0.1), STATS.len()),
            counters: home::stat_counters(),
            latest: RevealOrchestrator::new(
                ViewportMargin::parse("-5%"),
                Entrance::section_settle(),
            ),
        })
    }

    /// Advance springs by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for line in &mut self.headline {
            line.step(dt);
        }
        self.cta.tick(dt);
        self.orbit.tick(dt);
    }

    pub fn is_animating(&self, now: f32) -> bool {
        self.headline.iter().any(Spring::is_animating)
            || self.cta.is_animating()
            || self.orbit.is_animating()
            || self.values.is_animating(now)
            || self.testimonials.is_animating(now)
            || self.stats.is_animating(now)
            || self.latest.is_animating(now)
            || self.counters.iter().any(|c| c.is_animating(now))
    }

    /// Publish this frame's geometry. Returns `true` if any progress moved.
    pub fn flush(&mut self) -> bool {
        let mut changed = self.hero.flush();
        for tracker in self.steps.iter_mut().chain(self.expertise.iter_mut()) {
            changed |= tracker.flush();
        }
        changed
    }

    /// Leaving the page: trackers stop accepting geometry.
    pub fn unmount(&mut self) {
        self.hero.unmount();
        for tracker in self.steps.iter_mut().chain(self.expertise.iter_mut()) {
            tracker.unmount();
        }
        for reveal in [&mut self.values, &mut self.testimonials, &mut self.stats, &mut self.latest] {
            reveal.unmount();
        }
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Arrow keys step the orbit selection, but only while the ring or one
    /// of its nodes has keyboard focus. Returns `true` if the selection moved.
    fn orbit_keys(&mut self, focused: bool, next: bool, previous: bool) -> bool {
        if !focused {
            return false;
        }
        if next {
            self.orbit.select_next()
        } else if previous {
            self.orbit.select_previous()
        } else {
            false
        }
    }

    /// Draw the whole page. `viewport` is the scroll area's visible rect.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        viewport: egui::Rect,
        now: f32,
        repo: &ArticleRepository,
        navigate_to: &mut Option<Route>,
    ) {
        self.draw_hero(ui, viewport);
        self.draw_process(ui, viewport);
        draw_trust_ticker(ui);
        self.draw_values(ui, viewport, now);
        self.draw_orbit(ui);
        self.draw_expertise(ui, viewport);
        self.draw_calculator(ui);
        self.draw_testimonials(ui, viewport, now);
        self.draw_stats(ui, viewport, now);
        self.draw_latest(ui, viewport, now, repo, navigate_to);
    }

    // ─── Hero ──────────────────────────────────────────────────────────────────

    fn draw_hero(&mut self, ui: &mut egui::Ui, viewport: egui::Rect) {
        let progress = self.hero.current_progress();
        let text = self.hero_text.evaluate(progress);
        let letterbox = self.hero_letterbox.evaluate(progress);

        let rect = ui
            .vertical(|ui| {
                ui.set_min_height(viewport.height() * 0.9);
                // Letterbox bar height is a fraction of the hero.
                let bar = letterbox.translate_y * viewport.height();
                ui.add_space(bar.max(0.0));
                ui.add_space(viewport.height() * 0.12);

                ui::with_visual(ui, &text, |ui| {
                    ui.label(egui::RichText::new(HERO.eyebrow.to_uppercase()).size(13.0).color(ui::ACCENT));
                    ui.add_space(12.0);
                    for (line, spring) in HERO.headline.iter().zip(&self.headline) {
                        let drop = spring.value();
                        let opacity = (1.0 - drop / LETTER_DROP).clamp(0.0, 1.0);
                        ui.scope(|ui| {
                            ui.set_opacity(opacity);
                            ui.add_space(drop.max(0.0) * 0.25);
                            ui.label(egui::RichText::new(*line).size(52.0).strong());
                        });
                    }
                    ui.add_space(28.0);
                });
                ui.set_opacity(text.opacity);
                self.draw_magnetic_cta(ui);
                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    ui.set_opacity(letterbox.opacity.max(text.opacity));
                    ui.label(egui::RichText::new(FEATURED_PROJECT.name).strong());
                    ui.separator();
                    ui.label(FEATURED_PROJECT.area);
                    ui.separator();
                    ui.label(FEATURED_PROJECT.materials);
                    ui.separator();
                    ui.label(egui::RichText::new(FEATURED_PROJECT.status).color(ui::MUTED));
                });
            })
            .response
            .rect;
        self.hero.push_layout(ui::scroll_layout(rect, viewport));
    }

    fn draw_magnetic_cta(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(220.0, 52.0), egui::Sense::click());
        match response.hover_pos() {
            Some(pos) => self.cta.pointer_move(ui::point_of(pos), ui::bounds_of(rect)),
            None => self.cta.pointer_leave(),
        }
        let offset = self.cta.offset();
        let shown = rect.translate(egui::vec2(offset.smoothed_x, offset.smoothed_y));
        let painter = ui.painter();
        painter.rect_filled(shown, 26.0, egui::Color32::WHITE);
        painter.text(
            shown.center(),
            egui::Align2::CENTER_CENTER,
            HERO.call_to_action,
            egui::FontId::proportional(16.0),
            egui::Color32::BLACK,
        );
        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            debug!("hero call to action pressed");
            self.jump_to_process = true;
        }
    }

    // ─── Process ───────────────────────────────────────────────────────────────

    fn draw_process(&mut self, ui: &mut egui::Ui, viewport: egui::Rect) {
        ui.add_space(48.0);
        let heading = ui::section_heading(ui, "Our Process", "Four movements. One standard.");
        if std::mem::take(&mut self.jump_to_process) {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            let visual = self.step_curves.evaluate(self.steps[i].current_progress());
            let active = i == self.active_step;
            let rect = ui::with_visual(ui, &visual, |ui| {
                ui.set_min_height(viewport.height() * 0.45);
                let number = egui::RichText::new(step.step).size(44.0).strong();
                ui.label(if active { number.color(ui::ACCENT) } else { number.color(ui::MUTED) });
                ui.label(egui::RichText::new(step.title).size(24.0).strong());
                ui.add_space(6.0);
                ui.label(step.description);
            });
            let layout = ui::scroll_layout(rect, viewport);
            if self.active_margin.intersects(&layout) && self.active_step != i {
                debug!("process step {} active", step.step);
                self.active_step = i;
            }
            self.steps[i].push_layout(layout);
            ui.add_space(24.0);
        }
    }

    // ─── Values ────────────────────────────────────────────────────────────────

    fn draw_values(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, now: f32) {
        ui.add_space(48.0);
        ui::section_heading(ui, "Why Verrazano", "Built beyond the standard.");
        let top = ui.cursor().top();
        let values = &self.values;
        ui.columns(VALUES.len(), |columns| {
            for (i, (col, value)) in columns.iter_mut().zip(VALUES.iter()).enumerate() {
                ui::with_visual(col, &values.child_visual(i, now), |ui| {
                    ui.label(egui::RichText::new(value.title).size(20.0).strong());
                    ui.add_space(4.0);
                    ui.label(value.description);
                });
            }
        });
        let layout = ui::scroll_layout(span_since(ui, top), viewport);
        self.values.observe(&layout, now);
    }

    // ─── Orbit ─────────────────────────────────────────────────────────────────

    fn draw_orbit(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui::section_heading(ui, "Capabilities", "An ecosystem of expertise.");
        ui.horizontal(|ui| {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(ORBIT_SIZE, ORBIT_SIZE), egui::Sense::click());
            if response.clicked() {
                response.request_focus();
            }
            let center = response.rect.center();
            painter.circle_stroke(center, ORBIT_RADIUS, egui::Stroke::new(1.0, ui::MUTED));

            let ring = self.orbit.animated_rotation();
            let selected = self.orbit.selected();
            let mut hovered = None;
            let mut clicked = None;
            let mut focused = response.has_focus().then_some(response.id);
            for node in self.orbit.nodes() {
                let Some(pos) = self.orbit.node_position(node.id, ui::point_of(center), ORBIT_RADIUS)
                else {
                    continue;
                };
                let pos = ui::pos_of(pos);
                let hit = ui.interact(
                    egui::Rect::from_center_size(pos, egui::vec2(ORBIT_NODE_RADIUS * 2.0, ORBIT_NODE_RADIUS * 2.0)),
                    ui.id().with(("orbit-node", node.id)),
                    egui::Sense::click(),
                );
                if hit.hovered() {
                    hovered = Some(node.id);
                }
                if hit.clicked() {
                    clicked = Some(node.id);
                }
                if hit.has_focus() {
                    focused = Some(hit.id);
                }
                let fill = if node.id == selected { ui::ACCENT } else { ui::SURFACE };
                painter.circle_filled(pos, ORBIT_NODE_RADIUS, fill);

                // Labels ride the ring and are counter-rotated back upright.
                let counter = self.orbit.node_content_rotation(node.id).unwrap_or(0.0);
                let angle = (ring + node.angle_degrees + counter).to_radians();
                let galley = painter.layout(
                    node.label.clone(),
                    egui::FontId::proportional(11.0),
                    egui::Color32::WHITE,
                    ORBIT_NODE_RADIUS * 1.8,
                );
                let origin = pos - galley.size() / 2.0;
                let mut text = egui::epaint::TextShape::new(origin, galley, egui::Color32::WHITE);
                text.angle = angle;
                painter.add(text);
            }

            if let Some(id) = clicked {
                self.orbit.activate(id);
            } else if let Some(id) = hovered {
                self.orbit.hover(id);
            }
            if let Some(id) = focused {
                // Left/right belong to the ring while it holds focus.
                ui.memory_mut(|m| {
                    m.set_focus_lock_filter(
                        id,
                        egui::EventFilter { horizontal_arrows: true, ..Default::default() },
                    )
                });
            }
            let (next, previous) = ui.input(|i| {
                (i.key_pressed(egui::Key::ArrowRight), i.key_pressed(egui::Key::ArrowLeft))
            });
            if self.orbit_keys(focused.is_some(), next, previous) && focused != Some(response.id) {
                // Focus follows the selection between nodes.
                let node_id = ui.id().with(("orbit-node", self.orbit.selected()));
                ui.memory_mut(|m| m.request_focus(node_id));
            }

            ui.vertical(|ui| {
                ui.add_space(ORBIT_SIZE * 0.3);
                let node = self.orbit.selected_node();
                ui.label(egui::RichText::new(&node.label).size(26.0).strong());
                ui.add_space(8.0);
                ui.label(node.detail.as_str());
            });
        });
    }

    // ─── Expertise ─────────────────────────────────────────────────────────────

    fn draw_expertise(&mut self, ui: &mut egui::Ui, viewport: egui::Rect) {
        ui.add_space(48.0);
        ui::section_heading(ui, "Expertise", "Disciplines we have mastered.");
        for (item, tracker) in EXPERTISE.iter().zip(self.expertise.iter_mut()) {
            let drift = self.expertise_parallax.evaluate(tracker.current_progress());
            let rect = ui::with_visual(ui, &drift, |ui| {
                egui::Frame::none()
                    .fill(ui::SURFACE)
                    .inner_margin(16.0)
                    .rounding(8.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(item.title).size(22.0).strong());
                        ui.add_space(4.0);
                        ui.label(item.description);
                        ui.add_space(8.0);
                        for feature in item.features {
                            ui.label(format!("  \u{2022} {feature}"));
                        }
                    });
            });
            tracker.push_layout(ui::scroll_layout(rect, viewport));
            ui.add_space(16.0);
        }
    }

    // ─── Calculator ────────────────────────────────────────────────────────────

    fn draw_calculator(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui::section_heading(ui, "Diagnostic", "Restore, don't replace.");
        let mut area = self.calculator.area();
        let slider = egui::Slider::new(&mut area, AREA_MIN..=AREA_MAX)
            .step_by(f64::from(AREA_STEP))
            .custom_formatter(|v, _| format!("{} sq ft", format_thousands(v as u64)))
            .text("Roof area");
        if ui.add(slider).changed() {
            self.calculator.set_area(area);
        }
        ui.add_space(8.0);
        for benefit in CALCULATOR_BENEFITS {
            ui.label(format!("\u{2713} {benefit}"));
        }
        ui.add_space(8.0);
        match self.calculator.visible_result() {
            Some(result) => {
                egui::Grid::new("roi-result").spacing([24.0, 6.0]).show(ui, |ui| {
                    ui.label("Full tear-off");
                    ui.label(egui::RichText::new(result.removal_label()).color(ui::MUTED));
                    ui.end_row();
                    ui.label("Performance coating");
                    ui.label(result.coating_label());
                    ui.end_row();
                    ui.label(egui::RichText::new("You save").strong());
                    ui.label(egui::RichText::new(result.savings_label()).size(22.0).color(ui::ACCENT));
                    ui.end_row();
                });
            }
            None => {
                if ui.button("Calculate Savings").clicked() {
                    self.calculator.reveal();
                }
            }
        }
    }

    // ─── Testimonials ──────────────────────────────────────────────────────────

    fn draw_testimonials(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, now: f32) {
        ui.add_space(48.0);
        ui::section_heading(ui, "Testimonials", "Trusted by those who demand more.");
        let top = ui.cursor().top();
        let reveal = &self.testimonials;
        for (r, items) in TESTIMONIALS.chunks(3).enumerate() {
            ui.columns(items.len(), |columns| {
                for (c, (col, t)) in columns.iter_mut().zip(items).enumerate() {
                    ui::with_visual(col, &reveal.child_visual(r * 3 + c, now), |ui| {
                        ui.label(egui::RichText::new(ui::stars(t.rating)).color(ui::ACCENT));
                        ui.label(egui::RichText::new(format!("\u{201C}{}\u{201D}", t.quote)).italics());
                        ui.add_space(6.0);
                        ui.label(egui::RichText::new(t.name).strong());
                        ui.label(egui::RichText::new(t.role).color(ui::MUTED));
                    });
                }
            });
            ui.add_space(16.0);
        }
        self.testimonials.observe(&ui::scroll_layout(span_since(ui, top), viewport), now);
    }

    // ─── Stats ─────────────────────────────────────────────────────────────────

    fn draw_stats(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, now: f32) {
        ui.add_space(48.0);
        ui::section_heading(ui, "By the Numbers", "Precision at scale.");
        let top = ui.cursor().top();
        let (reveal, counters) = (&self.stats, &self.counters);
        ui.columns(STATS.len(), |columns| {
            for (i, (col, stat)) in columns.iter_mut().zip(STATS.iter()).enumerate() {
                ui::with_visual(col, &reveal.child_visual(i, now), |ui| {
                    ui.label(egui::RichText::new(counters[i].label_at(now)).size(40.0).strong());
                    ui.label(egui::RichText::new(stat.label).strong());
                    ui.label(egui::RichText::new(stat.description).color(ui::MUTED));
                });
            }
        });
        let was_revealed = self.stats.is_revealed();
        self.stats.observe(&ui::scroll_layout(span_since(ui, top), viewport), now);
        if !was_revealed && self.stats.is_revealed() {
            for counter in &mut self.counters {
                counter.start(now);
            }
        }
    }

    // ─── Latest articles ───────────────────────────────────────────────────────

    fn draw_latest(
        &mut self,
        ui: &mut egui::Ui,
        viewport: egui::Rect,
        now: f32,
        repo: &ArticleRepository,
        navigate_to: &mut Option<Route>,
    ) {
        ui.add_space(48.0);
        let rect = ui::with_visual(ui, &self.latest.visual(now), |ui| {
            ui::section_heading(ui, "Insights", "Latest from the blog.");
            for article in repo.latest(LATEST_ARTICLES) {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(article.short_date()).color(ui::MUTED));
                    let title = ui.add(
                        egui::Label::new(egui::RichText::new(&article.title).size(18.0).strong())
                            .sense(egui::Sense::click()),
                    );
                    if title.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        *navigate_to = Some(Route::Article(article.slug.clone()));
                    }
                });
                ui.label(ui::truncate_str(&article.excerpt, 160));
                ui.add_space(10.0);
            }
            if ui.button("View All Articles").clicked() {
                *navigate_to = Some(Route::Blog);
            }
        });
        self.latest.observe(&ui::scroll_layout(rect, viewport), now);
        ui.add_space(48.0);
    }
}

/// Rect covering everything laid out in `ui` since the cursor was at `top`.
fn span_since(ui: &egui::Ui, top: f32) -> egui::Rect {
    let full = ui.min_rect();
    egui::Rect::from_min_max(egui::pos2(full.left(), top), egui::pos2(full.right(), ui.cursor().top()))
}

fn draw_trust_ticker(ui: &mut egui::Ui) {
    ui.add_space(32.0);
    ui.horizontal_wrapped(|ui| {
        for badge in TRUST_BADGES {
            ui.label(egui::RichText::new(badge).size(15.0).color(ui::MUTED));
            ui.add_space(28.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_rates() {
        let page = HomePage::new(CostRates::default()).unwrap();
        assert_eq!(page.steps.len(), PROCESS_STEPS.len());
        assert_eq!(page.expertise.len(), EXPERTISE.len());
        assert_eq!(page.counters.len(), STATS.len());
        assert_eq!(page.active_step(), 0);
    }

    #[test]
    fn headline_settles() {
        let mut page = HomePage::new(CostRates::default()).unwrap();
        assert!(page.is_animating(0.0));
        for _ in 0..600 {
            page.tick(1.0 / 60.0);
        }
        assert!(page.headline.iter().all(|s| s.value() == 0.0));
    }

    #[test]
    fn unmounted_trackers_ignore_geometry() {
        let mut page = HomePage::new(CostRates::default()).unwrap();
        page.unmount();
        page.hero.push_layout(verrazano_site::motion::scroll::ScrollLayout::new(-400.0, 800.0, 800.0));
        assert!(!page.flush());
        assert_eq!(page.hero.current_progress(), 0.0);
    }

    #[test]
    fn orbit_arrows_need_focus_not_hover() {
        let mut page = HomePage::new(CostRates::default()).unwrap();
        let start = page.orbit.selected();
        assert!(!page.orbit_keys(false, true, false));
        assert_eq!(page.orbit.selected(), start);

        assert!(page.orbit_keys(true, true, false));
        assert_ne!(page.orbit.selected(), start);
        assert!(page.orbit_keys(true, false, true));
        assert_eq!(page.orbit.selected(), start);
        assert!(!page.orbit_keys(true, false, false));
    }
}
