use std::io;
use std::path::PathBuf;

use h2c_core::DecodeError;
use serde::{Deserialize, Serialize};

/// When a file load re-sends the full setting set to the live sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplayMode {
    /// After every record read, so the receiver holds a complete snapshot
    /// even if a later line aborts the load.
    #[default]
    PerLine,
    /// Once, after the last line.
    AtEnd,
}

/// A binding named an action its list does not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction {
    pub key: String,
    pub name: String,
}

impl UnknownAction {
    /// Text for the error dialog.
    pub fn message(&self) -> String {
        format!("Action does not exist: {}", self.name)
    }
}

/// Summary of one configuration file load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub path: PathBuf,
    /// Records whose key was recognized and applied.
    pub applied: usize,
    /// Lines without a `=` separator.
    pub skipped_lines: usize,
    pub unknown_keys: Vec<String>,
    /// Records for derived keys that have no control of their own.
    pub write_only: usize,
    pub unknown_actions: Vec<UnknownAction>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("configuration file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid value {value:?} for {key}: {source}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        source: DecodeError,
    },
}
