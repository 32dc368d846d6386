use std::fmt;

/// Where a record is headed. Some keys are only meaningful in a saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// The runtime listening on the local datagram port.
    Live,
    /// A configuration file being written.
    File,
}

/// One `key=value` line, the unit of both the datagram payload and the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Split a line on its first `=`. Lines without one are not records.
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.split_once('=')?;
        Some(Self::new(key.trim(), value.trim()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_separator() {
        let r = Record::parse("left.pinch=/input/trigger/value").unwrap();
        assert_eq!(r.key, "left.pinch");
        assert_eq!(r.value, "/input/trigger/value");

        let r = Record::parse("odd=a=b").unwrap();
        assert_eq!(r.value, "a=b");
    }

    #[test]
    fn test_parse_rejects_lines_without_separator() {
        assert!(Record::parse("").is_none());
        assert!(Record::parse("# a comment").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::new("opacity", "1").to_string(), "opacity=1");
        assert_eq!(Record::new("left.pinch", "").to_string(), "left.pinch=");
    }
}
