use anyhow::anyhow;
use eframe::egui;
use h2c_gui::prefs::prefs_path;
use h2c_gui::{PanelApp, PanelPrefs};

struct ConfigWindow {
    panel: PanelApp,
}

impl eframe::App for ConfigWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.update(ctx);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = prefs_path();
    let prefs = PanelPrefs::load_or_default(&path);
    log::info!("Using preferences from {}", path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Hand to Controller"),
        ..Default::default()
    };

    eframe::run_native(
        "Hand to Controller",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ConfigWindow {
                panel: PanelApp::new(prefs, path),
            }))
        }),
    )
    .map_err(|e| anyhow!("Window closed with an error: {e}"))
}
