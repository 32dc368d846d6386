pub mod app;
pub mod dialogs;
pub mod menu_bar;
pub mod prefs;
pub mod tabs;

pub use app::PanelApp;
pub use menu_bar::{MenuAction, MenuState};
pub use prefs::PanelPrefs;
pub use tabs::Tab;
