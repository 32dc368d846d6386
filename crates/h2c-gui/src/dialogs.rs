use std::collections::VecDeque;

/// Draw the About dialog window.
pub fn draw_about_dialog(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("About")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Hand-to-controller configuration");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.label("Tunes how tracked hands emulate motion controllers.");
                ui.label("Changes are pushed live to the runtime layer over UDP");
                ui.label("and can be saved to a .cfg file it loads at startup.");
            });
        });
}

/// Show the oldest pending alert. Other controls stay blocked behind it until
/// it is acknowledged.
pub fn draw_alert_dialog(ctx: &egui::Context, alerts: &mut VecDeque<String>) {
    let Some(message) = alerts.front() else {
        return;
    };

    let mut acknowledged = false;
    egui::Modal::new(egui::Id::new("alert_dialog")).show(ctx, |ui| {
        ui.heading("Error");
        ui.add_space(4.0);
        ui.label(message.as_str());
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            acknowledged = true;
        }
    });

    if acknowledged {
        alerts.pop_front();
    }
}
