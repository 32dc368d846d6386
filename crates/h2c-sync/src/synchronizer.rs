use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use h2c_core::{Decoded, Edit, Record, SettingKey, Settings, SinkKind};
use h2c_net::RecordSink;

use crate::file_sink::FileSink;
use crate::report::{LoadError, LoadReport, ReplayMode, UnknownAction};

/// Keeps the in-memory settings and every sink in agreement.
///
/// All changes funnel through [`Synchronizer::dispatch`], which takes the
/// destination explicitly. Live destinations also update the status line.
#[derive(Debug)]
pub struct Synchronizer {
    settings: Settings,
    initializing: bool,
    replay: ReplayMode,
    status: String,
}

impl Synchronizer {
    /// Populate defaults with dispatch suppressed. Nothing reaches `live`.
    pub fn new(live: &mut dyn RecordSink) -> Self {
        let mut sync = Self {
            settings: Settings::default(),
            initializing: false,
            replay: ReplayMode::default(),
            status: String::new(),
        };
        if let Err(e) = sync.populate_defaults(live) {
            log::error!("Populating defaults failed: {}", e);
        }
        sync
    }

    pub fn with_replay(mut self, replay: ReplayMode) -> Self {
        self.replay = replay;
        self
    }

    pub fn set_replay(&mut self, replay: ReplayMode) {
        self.replay = replay;
    }

    pub fn replay(&self) -> ReplayMode {
        self.replay
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Text of the last live record or completed operation.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    /// Apply one control change and dispatch every key it affects.
    pub fn edit(&mut self, edit: Edit, sink: &mut dyn RecordSink) -> io::Result<()> {
        for key in self.settings.apply(edit) {
            self.dispatch(key, sink)?;
        }
        Ok(())
    }

    /// Serialize `key` and deliver it to `sink`. A no-op while defaults are
    /// being populated, and for keys the sink does not take.
    pub fn dispatch(&mut self, key: SettingKey, sink: &mut dyn RecordSink) -> io::Result<()> {
        if self.initializing {
            log::trace!("Suppressed {} while initializing", key.name());
            return Ok(());
        }
        let Some(record) = key.encode(&self.settings, sink.kind()) else {
            return Ok(());
        };
        sink.deliver(&record)?;
        if sink.kind() == SinkKind::Live {
            self.status = record.to_string();
        }
        Ok(())
    }

    /// Re-dispatch every setting in flush order, changed or not.
    pub fn flush_all(&mut self, sink: &mut dyn RecordSink) -> io::Result<()> {
        for key in SettingKey::flush_order() {
            self.dispatch(key, sink)?;
        }
        Ok(())
    }

    /// Flush everything to the live sink on request.
    pub fn push_all(&mut self, live: &mut dyn RecordSink) -> io::Result<()> {
        self.flush_all(live)?;
        self.status = "Pushed all settings".to_string();
        log::info!("Pushed all settings");
        Ok(())
    }

    /// Write the full setting set to `path`, one record per line.
    pub fn save_to_file(&mut self, path: &Path) -> io::Result<()> {
        let mut file = FileSink::create(path)?;
        self.flush_all(&mut file)?;
        file.finish()?;
        self.status = format!("Saved to {}", path.display());
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Read `path` back into the settings, replaying the full set to `live`
    /// as configured by the [`ReplayMode`].
    ///
    /// Lines without `=` (including undecodable text) and unknown keys are
    /// skipped. An action name missing
    /// from its list selects the list's first entry and is reported in
    /// [`LoadReport::unknown_actions`]. A value that does not parse aborts the
    /// load; lines before it stay applied.
    pub fn load_from_file(&mut self, path: &Path, live: &mut dyn RecordSink) -> Result<LoadReport, LoadError> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut report = LoadReport {
            path: path.to_path_buf(),
            ..Default::default()
        };

        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            // Invalid UTF-8 is replaced per line, never fatal.
            let line = String::from_utf8_lossy(&buf);
            let Some(record) = Record::parse(line.trim_end_matches(['\n', '\r'])) else {
                report.skipped_lines += 1;
                continue;
            };
            self.apply_record(line_no, record, &mut report)?;
            if self.replay == ReplayMode::PerLine {
                self.flush_all(live)?;
            }
        }
        if self.replay == ReplayMode::AtEnd {
            self.flush_all(live)?;
        }

        self.status = format!("Loaded from {}", path.display());
        log::info!(
            "Loaded {} records from {} ({} skipped lines, {} unknown keys)",
            report.applied,
            path.display(),
            report.skipped_lines,
            report.unknown_keys.len()
        );
        Ok(report)
    }

    /// Reset every control to its default, then flush the result live.
    pub fn restore_defaults(&mut self, live: &mut dyn RecordSink) -> io::Result<()> {
        self.populate_defaults(live)?;
        self.flush_all(live)?;
        self.status = "Restored defaults".to_string();
        log::info!("Restored defaults");
        Ok(())
    }

    fn populate_defaults(&mut self, sink: &mut dyn RecordSink) -> io::Result<()> {
        self.initializing = true;
        let result = Settings::default()
            .as_edits()
            .into_iter()
            .try_for_each(|edit| self.edit(edit, sink));
        self.initializing = false;
        result
    }

    fn apply_record(&mut self, line: usize, record: Record, report: &mut LoadReport) -> Result<(), LoadError> {
        let Some(key) = SettingKey::from_name(&record.key) else {
            log::warn!("Ignoring unknown key {:?} on line {}", record.key, line);
            report.unknown_keys.push(record.key);
            return Ok(());
        };
        let decoded = match key.decode(&record.value) {
            Ok(decoded) => decoded,
            Err(source) => {
                return Err(LoadError::InvalidValue {
                    line,
                    key: record.key,
                    value: record.value,
                    source,
                })
            }
        };
        match decoded {
            Decoded::Edits(edits) => {
                for edit in edits {
                    self.settings.apply(edit);
                }
                report.applied += 1;
            }
            Decoded::UnknownAction { name, fallback } => {
                log::warn!("Line {}: action does not exist: {}", line, name);
                self.settings.apply(fallback);
                report.applied += 1;
                report.unknown_actions.push(UnknownAction { key: record.key, name });
            }
            Decoded::WriteOnly => report.write_only += 1,
        }
        Ok(())
    }
}
