use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use h2c_core::{Record, SinkKind};
use h2c_net::RecordSink;

/// Writes one `key=value` line per record.
///
/// The underlying file is closed when the sink is dropped, whether or not
/// the flush that fed it succeeded.
pub struct FileSink<W: Write = BufWriter<File>> {
    writer: W,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::from_writer(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> FileSink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Flush buffered lines and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> RecordSink for FileSink<W> {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn deliver(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.writer, "{}", record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_record() {
        let mut sink = FileSink::from_writer(Vec::new());
        sink.deliver(&Record::new("skin_tone", "1")).unwrap();
        sink.deliver(&Record::new("opacity", "0.5")).unwrap();
        let bytes = sink.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "skin_tone=1\nopacity=0.5\n");
    }
}
