use h2c_net::NetConfig;
use h2c_sync::ReplayMode;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides where preferences are kept.
pub const PREFS_PATH_ENV: &str = "H2C_PANEL_PREFS";
const DEFAULT_PREFS_FILE: &str = "h2c-panel.json";

/// Panel preferences, kept between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PanelPrefs {
    pub net: NetConfig,
    pub replay: ReplayMode,
    /// Configuration file last loaded or saved.
    pub last_config: Option<PathBuf>,
}

impl PanelPrefs {
    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match load_prefs(path) {
            Ok(prefs) => prefs,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Ignoring preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Preference file location, honoring [`PREFS_PATH_ENV`].
pub fn prefs_path() -> PathBuf {
    std::env::var_os(PREFS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_FILE))
}

/// Save preferences to disk as JSON.
pub fn save_prefs(path: &Path, prefs: &PanelPrefs) -> io::Result<()> {
    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load preferences from disk.
pub fn load_prefs(path: &Path) -> io::Result<PanelPrefs> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let prefs = PanelPrefs {
            net: NetConfig {
                host: "127.0.0.1".to_string(),
                port: 20002,
            },
            replay: ReplayMode::AtEnd,
            last_config: Some(PathBuf::from("hands.cfg")),
        };
        save_prefs(&path, &prefs).unwrap();
        assert_eq!(load_prefs(&path).unwrap(), prefs);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{ "replay": "AtEnd" }"#).unwrap();
        let prefs = PanelPrefs::load_or_default(&path);
        assert_eq!(prefs.replay, ReplayMode::AtEnd);
        assert_eq!(prefs.net, NetConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(PanelPrefs::load_or_default(&path), PanelPrefs::default());
        assert_eq!(PanelPrefs::load_or_default(&dir.path().join("absent.json")), PanelPrefs::default());
    }
}
