use std::io;

use h2c_core::{Record, SinkKind};

/// A destination for dispatched records.
pub trait RecordSink {
    fn kind(&self) -> SinkKind;

    /// Deliver one record. Live sinks never fail; file sinks surface I/O errors.
    fn deliver(&mut self, record: &Record) -> io::Result<()>;
}

/// Collects records in memory.
#[derive(Debug)]
pub struct MemorySink {
    kind: SinkKind,
    pub records: Vec<Record>,
}

impl MemorySink {
    pub fn new(kind: SinkKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn live() -> Self {
        Self::new(SinkKind::Live)
    }

    /// Records rendered as `key=value` lines.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.to_string()).collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl RecordSink for MemorySink {
    fn kind(&self) -> SinkKind {
        self.kind
    }

    fn deliver(&mut self, record: &Record) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
