/// Diagram of the hand joint naming convention.
pub const JOINT_CONVENTION_URL: &str = "https://raw.githubusercontent.com/KhronosGroup/OpenXR-Docs/master/specification/sources/images/ext_hand_tracking_joint_convention.png";
/// Diagram of the controller grip pose axes.
pub const GRIP_AXES_URL: &str =
    "https://raw.githubusercontent.com/KhronosGroup/OpenXR-Docs/master/specification/sources/images/grip_axes_diagram.png";

/// Tracks which dialogs are currently open.
#[derive(Default)]
pub struct MenuState {
    pub show_about: bool,
}

/// Actions returned from the menu bar that require processing by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Load,
    Save,
    Flush,
    RestoreDefaults,
}

/// Draw the menu bar inside a `TopBottomPanel`. Returns the requested action.
pub fn draw_menu_bar(ui: &mut egui::Ui, state: &mut MenuState) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui
                .add(egui::Button::new("Load...").shortcut_text("Ctrl+O"))
                .clicked()
            {
                action = MenuAction::Load;
                ui.close_menu();
            }
            if ui
                .add(egui::Button::new("Save...").shortcut_text("Ctrl+S"))
                .clicked()
            {
                action = MenuAction::Save;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Flush").clicked() {
                action = MenuAction::Flush;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Restore defaults").clicked() {
                action = MenuAction::RestoreDefaults;
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            ui.hyperlink_to("Hand joint convention", JOINT_CONVENTION_URL);
            ui.hyperlink_to("Grip pose axes", GRIP_AXES_URL);
            ui.separator();
            if ui.button("About").clicked() {
                state.show_about = true;
                ui.close_menu();
            }
        });
    });

    if action == MenuAction::None {
        action = shortcut_action(ui.ctx());
    }
    action
}

fn shortcut_action(ctx: &egui::Context) -> MenuAction {
    ctx.input_mut(|i| {
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::O) {
            MenuAction::Load
        } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
            MenuAction::Save
        } else {
            MenuAction::None
        }
    })
}
