use h2c_core::catalog::{ACTIONS, HAND_JOINTS, INTERACTION_PROFILES, SKIN_TONES};
use h2c_core::settings::{
    CLICK_THRESHOLD_MAX, OFFSET_RANGE_MM, OPACITY_MAX, PROJ_LAYER_INDEX_MAX, ROTATION_RANGE_DEG,
};
use h2c_core::{Axis, Bound, Catalog, Edit, Gesture, Hand, Settings, ThresholdPair};
use std::ops::RangeInclusive;

use crate::menu_bar::{GRIP_AXES_URL, JOINT_CONVENTION_URL};

/// Pages of the configuration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Offsets,
    Bindings,
    Gestures,
    Misc,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Offsets, Tab::Bindings, Tab::Gestures, Tab::Misc];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Offsets => "Offsets",
            Tab::Bindings => "Bindings",
            Tab::Gestures => "Gestures",
            Tab::Misc => "Misc",
        }
    }
}

/// Draw one tab against the current settings. Controls never write to
/// `settings` directly; changes come back as edits for the synchronizer.
pub fn draw_tab(ui: &mut egui::Ui, tab: Tab, settings: &Settings) -> Vec<Edit> {
    let mut edits = Vec::new();
    egui::ScrollArea::vertical().show(ui, |ui| match tab {
        Tab::Offsets => draw_offsets(ui, settings, &mut edits),
        Tab::Bindings => draw_bindings(ui, settings, &mut edits),
        Tab::Gestures => draw_gestures(ui, settings, &mut edits),
        Tab::Misc => draw_misc(ui, settings, &mut edits),
    });
    edits
}

fn draw_offsets(ui: &mut egui::Ui, settings: &Settings, edits: &mut Vec<Edit>) {
    for hand in Hand::BOTH {
        let current = settings.hand(hand);
        ui.heading(format!("{} hand", hand.name()));
        egui::Grid::new(("offsets", hand.id()))
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for axis in Axis::ALL {
                    ui.label(format!("Offset {}", axis.name()));
                    let mm = current.offset_mm[axis as usize];
                    if let Some(mm) = slider(ui, mm, -OFFSET_RANGE_MM..=OFFSET_RANGE_MM, " mm") {
                        edits.push(Edit::Offset { hand, axis, mm });
                    }
                    ui.end_row();
                }
                for axis in Axis::ALL {
                    ui.label(format!("Rotation {}", axis.name()));
                    let degrees = current.euler_deg[axis as usize];
                    let range = -ROTATION_RANGE_DEG..=ROTATION_RANGE_DEG;
                    if let Some(degrees) = slider(ui, degrees, range, "°") {
                        edits.push(Edit::Rotation { hand, axis, degrees });
                    }
                    ui.end_row();
                }
            });
        let label = format!("Disable {} hand", hand.name().to_lowercase());
        if let Some(disabled) = checkbox(ui, current.disabled, &label) {
            edits.push(Edit::HandDisabled { hand, disabled });
        }
        ui.separator();
    }

    ui.heading("Controller pose");
    egui::Grid::new("pose_joints").num_columns(2).show(ui, |ui| {
        ui.label("Grip joint");
        if let Some(index) = combo(ui, "grip_joint", &HAND_JOINTS, settings.grip_joint) {
            edits.push(Edit::GripJoint(index));
        }
        ui.end_row();
        ui.label("Aim joint");
        if let Some(index) = combo(ui, "aim_joint", &HAND_JOINTS, settings.aim_joint) {
            edits.push(Edit::AimJoint(index));
        }
        ui.end_row();
    });
    ui.horizontal(|ui| {
        ui.hyperlink_to("Joint convention", JOINT_CONVENTION_URL);
        ui.hyperlink_to("Grip axes", GRIP_AXES_URL);
    });
}

fn draw_bindings(ui: &mut egui::Ui, settings: &Settings, edits: &mut Vec<Edit>) {
    egui::Grid::new("bindings")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.label("");
            for hand in Hand::BOTH {
                ui.strong(hand.name());
            }
            ui.end_row();

            for gesture in Gesture::ALL {
                ui.label(gesture.name());
                for hand in Hand::BOTH {
                    if !hand.binds(gesture) {
                        ui.label("n/a");
                        continue;
                    }
                    let selected = settings.hand(hand).binding(gesture);
                    let id = ("binding", hand.id(), gesture.id());
                    if let Some(choice) = combo(ui, id, &ACTIONS, selected) {
                        edits.push(Edit::Binding { hand, gesture, choice });
                    }
                }
                ui.end_row();
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Interaction profile");
        let selected = settings.interaction_profile;
        if let Some(index) = combo(ui, "interaction_profile", &INTERACTION_PROFILES, selected) {
            edits.push(Edit::InteractionProfile(index));
        }
    });
}

fn draw_gestures(ui: &mut egui::Ui, settings: &Settings, edits: &mut Vec<Edit>) {
    ui.label("Distances at which a gesture starts (near) and is fully engaged (far).");
    egui::Grid::new("thresholds")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.label("");
            ui.strong("Near");
            ui.strong("Far");
            ui.end_row();

            for gesture in Gesture::ALL {
                ui.label(gesture.name());
                let pair = settings.threshold(gesture);
                for bound in [Bound::Near, Bound::Far] {
                    if let Some(value) = slider(ui, pair.get(bound), 0..=ThresholdPair::MAX, " mm") {
                        edits.push(Edit::Threshold { gesture, bound, value });
                    }
                }
                ui.end_row();
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Click threshold");
        if let Some(value) = slider(ui, settings.click_threshold, 0..=CLICK_THRESHOLD_MAX, "%") {
            edits.push(Edit::ClickThreshold(value));
        }
    });
}

fn draw_misc(ui: &mut egui::Ui, settings: &Settings, edits: &mut Vec<Edit>) {
    if let Some(disabled) = checkbox(ui, settings.display_disabled, "Disable hand display") {
        edits.push(Edit::DisplayDisabled(disabled));
    }
    if let Some(force) = checkbox(ui, settings.force_own_depth_buffer, "Force own depth buffer") {
        edits.push(Edit::ForceOwnDepthBuffer(force));
    }
    egui::Grid::new("display").num_columns(2).show(ui, |ui| {
        ui.label("Projection layer");
        let index = settings.proj_layer_index;
        if let Some(index) = slider(ui, index, 0..=PROJ_LAYER_INDEX_MAX, "") {
            edits.push(Edit::ProjLayerIndex(index));
        }
        ui.end_row();
        ui.label("Skin tone");
        if let Some(index) = combo(ui, "skin_tone", &SKIN_TONES, settings.skin_tone) {
            edits.push(Edit::SkinTone(index));
        }
        ui.end_row();
        ui.label("Opacity");
        if let Some(value) = slider(ui, settings.opacity, 0..=OPACITY_MAX, "%") {
            edits.push(Edit::Opacity(value));
        }
        ui.end_row();
    });
}

fn slider(ui: &mut egui::Ui, value: i32, range: RangeInclusive<i32>, suffix: &str) -> Option<i32> {
    let mut edited = value;
    let response = ui.add(egui::Slider::new(&mut edited, range).suffix(suffix));
    (response.changed() && edited != value).then_some(edited)
}

fn checkbox(ui: &mut egui::Ui, value: bool, text: &str) -> Option<bool> {
    let mut edited = value;
    ui.checkbox(&mut edited, text).changed().then_some(edited)
}

fn combo(
    ui: &mut egui::Ui,
    id_salt: impl std::hash::Hash,
    catalog: &Catalog,
    selected: usize,
) -> Option<usize> {
    let mut edited = selected;
    let response = egui::ComboBox::from_id_salt(id_salt)
        .width(180.0)
        .show_index(ui, &mut edited, catalog.len(), |i| catalog.label(i));
    (response.changed() && edited != selected).then_some(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names_unique() {
        let mut names: Vec<&str> = Tab::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Tab::ALL.len());
        assert_eq!(Tab::default(), Tab::Offsets);
    }

    #[test]
    fn test_untouched_tabs_emit_no_edits() {
        let ctx = egui::Context::default();
        let settings = Settings::default();
        for tab in Tab::ALL {
            let mut edits = Vec::new();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    edits = draw_tab(ui, tab, &settings);
                });
            });
            assert!(edits.is_empty(), "{} emitted {:?}", tab.name(), edits);
        }
    }
}
