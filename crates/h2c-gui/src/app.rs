use h2c_core::Edit;
use h2c_net::UdpSink;
use h2c_sync::Synchronizer;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::dialogs;
use crate::menu_bar::{draw_menu_bar, MenuAction, MenuState};
use crate::prefs::{save_prefs, PanelPrefs};
use crate::tabs::{self, Tab};

/// File used by Load/Save when no dialog is available and nothing was
/// loaded before.
pub const DEFAULT_CONFIG_FILE: &str = "hand-to-controller.cfg";

/// The configuration panel: the synchronizer, its live sink and the UI state
/// around them.
pub struct PanelApp {
    sync: Synchronizer,
    live: UdpSink,
    prefs: PanelPrefs,
    prefs_path: PathBuf,
    tab: Tab,
    menu: MenuState,
    alerts: VecDeque<String>,
}

impl PanelApp {
    pub fn new(prefs: PanelPrefs, prefs_path: PathBuf) -> Self {
        let mut live = UdpSink::new(prefs.net.clone());
        log::info!("Sending live settings to {}", prefs.net.endpoint());
        let sync = Synchronizer::new(&mut live).with_replay(prefs.replay);
        Self {
            sync,
            live,
            prefs,
            prefs_path,
            tab: Tab::default(),
            menu: MenuState::default(),
            alerts: VecDeque::new(),
        }
    }

    pub fn synchronizer(&self) -> &Synchronizer {
        &self.sync
    }

    pub fn prefs(&self) -> &PanelPrefs {
        &self.prefs
    }

    /// Messages waiting to be acknowledged, oldest first.
    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.alerts.iter().map(String::as_str)
    }

    /// Draw one frame.
    pub fn update(&mut self, ctx: &egui::Context) {
        let action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| draw_menu_bar(ui, &mut self.menu))
            .inner;
        self.handle_action(action);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.sync.status());
        });

        let mut edits = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.name());
                }
            });
            ui.separator();
            edits = tabs::draw_tab(ui, self.tab, self.sync.settings());
        });
        for edit in edits {
            self.apply_edit(edit);
        }

        dialogs::draw_about_dialog(ctx, &mut self.menu.show_about);
        dialogs::draw_alert_dialog(ctx, &mut self.alerts);
    }

    pub fn apply_edit(&mut self, edit: Edit) {
        if let Err(e) = self.sync.edit(edit, &mut self.live) {
            log::warn!("Failed to dispatch {:?}: {}", edit, e);
        }
    }

    pub fn handle_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::None => {}
            MenuAction::Load => {
                if let Some(path) = self.pick_load_path() {
                    self.load(&path);
                }
            }
            MenuAction::Save => {
                if let Some(path) = self.pick_save_path() {
                    self.save(&path);
                }
            }
            MenuAction::Flush => {
                if let Err(e) = self.sync.push_all(&mut self.live) {
                    log::warn!("Failed to push settings: {}", e);
                }
            }
            MenuAction::RestoreDefaults => {
                if let Err(e) = self.sync.restore_defaults(&mut self.live) {
                    log::warn!("Failed to push defaults: {}", e);
                }
            }
        }
    }

    /// Load a configuration file, queueing an alert for every problem found.
    pub fn load(&mut self, path: &Path) {
        match self.sync.load_from_file(path, &mut self.live) {
            Ok(report) => {
                self.alerts
                    .extend(report.unknown_actions.iter().map(|a| a.message()));
                self.remember(path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                self.alerts
                    .push_back(format!("Could not load {}: {}", path.display(), e));
            }
        }
    }

    pub fn save(&mut self, path: &Path) {
        match self.sync.save_to_file(path) {
            Ok(()) => self.remember(path),
            Err(e) => {
                log::error!("Failed to save {}: {}", path.display(), e);
                self.alerts
                    .push_back(format!("Could not save {}: {}", path.display(), e));
            }
        }
    }

    fn remember(&mut self, path: &Path) {
        self.prefs.last_config = Some(path.to_path_buf());
        if let Err(e) = save_prefs(&self.prefs_path, &self.prefs) {
            log::warn!("Failed to store preferences: {}", e);
        }
    }

    fn fallback_path(&self) -> PathBuf {
        self.prefs
            .last_config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    #[cfg(feature = "file-dialog")]
    fn config_dialog(&self) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new().add_filter("Configuration files", &["cfg"]);
        if let Some(dir) = self.prefs.last_config.as_deref().and_then(Path::parent) {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    #[cfg(feature = "file-dialog")]
    fn pick_load_path(&self) -> Option<PathBuf> {
        self.config_dialog()
            .set_title("Load configuration")
            .pick_file()
    }

    #[cfg(feature = "file-dialog")]
    fn pick_save_path(&self) -> Option<PathBuf> {
        let name = self
            .fallback_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        self.config_dialog()
            .set_title("Save configuration")
            .set_file_name(name)
            .save_file()
    }

    #[cfg(not(feature = "file-dialog"))]
    fn pick_load_path(&self) -> Option<PathBuf> {
        Some(self.fallback_path())
    }

    #[cfg(not(feature = "file-dialog"))]
    fn pick_save_path(&self) -> Option<PathBuf> {
        Some(self.fallback_path())
    }
}
