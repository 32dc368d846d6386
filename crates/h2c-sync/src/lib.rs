pub mod file_sink;
pub mod report;
pub mod synchronizer;

pub use file_sink::FileSink;
pub use report::{LoadError, LoadReport, ReplayMode, UnknownAction};
pub use synchronizer::Synchronizer;
