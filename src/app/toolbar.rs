//! Toolbar rendering for `SiteApp`.
//!
//! Draws back/forward buttons, the address field, the site navigation
//! links and the metadata panel toggle.

use eframe::egui;

use verrazano_site::site::home::HERO;
use verrazano_site::site::Route;

use super::SiteApp;
use crate::ui;

impl SiteApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Back / Forward
            let can_back = self.history_idx > 0;
            let can_fwd = self.history_idx + 1 < self.history.len();
            if ui
                .add_enabled(
                    can_back,
                    egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_back(ctx);
            }
            if ui
                .add_enabled(
                    can_fwd,
                    egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_forward(ctx);
            }

            ui.label(egui::RichText::new(&self.config.site_name).strong().color(ui::ACCENT));
            ui.separator();

            if ui.selectable_label(self.route == Route::Home, "Home").clicked() {
                self.navigate(Route::Home, ctx);
            }
            if ui.selectable_label(self.route.is_blog_section(), "Blog").clicked() {
                self.navigate(Route::Blog, ctx);
            }

            // Address bar
            let response = ui.add_sized(
                [(ui.available_width() - 220.0).max(120.0), 24.0],
                egui::TextEdit::singleline(&mut self.address)
                    .hint_text("/blog")
                    .font(egui::TextStyle::Monospace),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.navigate_to_address(ctx);
            }
            if ui.button("Go").clicked() {
                self.navigate_to_address(ctx);
            }

            ui.toggle_value(&mut self.show_meta, "Meta");

            if ui.button(HERO.nav_cta).clicked() {
                ctx.open_url(egui::OpenUrl::new_tab(format!(
                    "tel:{}",
                    self.config.telephone
                )));
            }
        });
    }
}
