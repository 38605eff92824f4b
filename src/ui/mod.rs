//! Stateless egui helpers shared by the home page and the blog.
//!
//! Translates article `Block`s into egui widgets, applies `VisualState` to a
//! region, and converts between egui geometry and the motion types.

use verrazano_site::content::{Block, Span};
use verrazano_site::motion::scroll::ScrollLayout;
use verrazano_site::motion::visual::VisualState;
use verrazano_site::motion::{Bounds, Point};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(212, 175, 55);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
pub const LINK: egui::Color32 = egui::Color32::from_rgb(120, 170, 230);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(24, 24, 24);

// ─── Geometry ─────────────────────────────────────────────────────────────────

/// Region geometry relative to the visible viewport.
pub fn scroll_layout(region: egui::Rect, viewport: egui::Rect) -> ScrollLayout {
    ScrollLayout::new(region.top() - viewport.top(), region.height(), viewport.height())
}

pub fn bounds_of(rect: egui::Rect) -> Bounds {
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn point_of(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn pos_of(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

// ─── Visual state ─────────────────────────────────────────────────────────────

/// Run `add_contents` with `visual` applied and return the region's rect.
///
/// egui has no per-widget transforms, so translation becomes spacing around
/// the region and scale/blur are only reflected through opacity.
pub fn with_visual(
    ui: &mut egui::Ui,
    visual: &VisualState,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Rect {
    let shift_down = visual.translate_y.max(0.0);
    let shift_up = (-visual.translate_y).max(0.0);
    ui.scope(|ui| {
        ui.set_opacity(visual.opacity.clamp(0.0, 1.0));
        ui.add_space(shift_down);
        ui.horizontal(|ui| {
            ui.add_space(visual.translate_x.max(0.0));
            ui.vertical(|ui| add_contents(ui));
        });
        ui.add_space(shift_up);
    })
    .response
    .rect
}

/// Eyebrow + heading pair opening each home page section.
pub fn section_heading(ui: &mut egui::Ui, eyebrow: &str, title: &str) -> egui::Response {
    let eyebrow = ui.label(egui::RichText::new(eyebrow.to_uppercase()).size(12.0).color(ACCENT));
    ui.add_space(4.0);
    ui.heading(egui::RichText::new(title).size(30.0).strong());
    ui.add_space(16.0);
    eyebrow
}

// ─── Article blocks ───────────────────────────────────────────────────────────

/// Render one article block. Returns the heading response so the caller can
/// scroll a table-of-contents target into view.
pub fn render_block(
    ui: &mut egui::Ui,
    block: &Block,
    clicked_link: &mut Option<String>,
) -> Option<egui::Response> {
    match block {
        Block::Heading { level, text, .. } => {
            let size = match level {
                1 => 28.0,
                2 => 22.0,
                _ => 18.0,
            };
            ui.add_space(10.0);
            let response = ui.heading(egui::RichText::new(text).size(size).strong());
            ui.add_space(6.0);
            return Some(response);
        }
        Block::Paragraph(spans) => {
            render_spans(ui, spans, clicked_link);
            ui.add_space(8.0);
        }
        Block::ListItem { depth, ordinal, spans } => {
            ui.horizontal_wrapped(|ui| {
                ui.add_space(16.0 * *depth as f32);
                match ordinal {
                    Some(n) => ui.label(format!("  {n}.")),
                    None => ui.label("  \u{2022}"),
                };
                render_spans(ui, spans, clicked_link);
            });
        }
        Block::Table { header, rows } => {
            ui.add_space(4.0);
            egui::Grid::new(ui.next_auto_id())
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for cell in header {
                        ui.label(egui::RichText::new(cell).strong());
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            ui.label(cell.as_str());
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
        }
        Block::Code(code) => {
            egui::Frame::none()
                .fill(SURFACE)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(code).monospace());
                });
            ui.add_space(8.0);
        }
        Block::Rule => {
            ui.separator();
        }
    }
    None
}

fn render_spans(ui: &mut egui::Ui, spans: &[Span], clicked_link: &mut Option<String>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let mut rt = egui::RichText::new(&span.text);
            if span.style.strong {
                rt = rt.strong();
            }
            if span.style.emphasis {
                rt = rt.italics();
            }
            if span.style.code {
                rt = rt.code();
            }
            if span.style.strikethrough {
                rt = rt.strikethrough();
            }
            match span.link {
                Some(ref href) => {
                    let link = ui.add(
                        egui::Label::new(rt.color(LINK).underline()).sense(egui::Sense::click()),
                    );
                    if link.clicked() {
                        *clicked_link = Some(href.clone());
                    }
                    link.on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(href);
                }
                None => {
                    ui.label(rt);
                }
            }
        }
    });
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` characters, appending `"..."` if cut.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// `★★★★☆`-style rating string.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}
