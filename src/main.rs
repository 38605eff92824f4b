mod app;
mod ui;

use eframe::egui;
use log::error;

use verrazano_site::SiteConfig;

fn main() {
    env_logger::init();

    let config = SiteConfig::default();
    let title = config.default_title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let app = app::SiteApp::new(config)?;
            Ok(Box::new(app))
        }),
    );

    if let Err(err) = result {
        error!("front-end exited with an error: {err}");
        std::process::exit(1);
    }
}
