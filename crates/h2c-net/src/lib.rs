pub mod config;
pub mod sink;
pub mod udp;

pub use config::NetConfig;
pub use sink::{MemorySink, RecordSink};
pub use udp::UdpSink;
