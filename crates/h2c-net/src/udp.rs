use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use h2c_core::{Record, SinkKind};

use crate::config::NetConfig;
use crate::sink::RecordSink;

/// Sends each record as one datagram to the runtime layer.
///
/// A fresh socket is opened per record and dropped right after the send.
/// Nothing is awaited and send failures are only logged.
#[derive(Debug, Clone)]
pub struct UdpSink {
    config: NetConfig,
}

impl UdpSink {
    pub fn new(config: NetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NetConfig {
        &self.config
    }

    fn send(&self, payload: &[u8]) -> io::Result<usize> {
        let target = resolve(&self.config)?;
        let local: SocketAddr = match target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local)?;
        socket.connect(target)?;
        socket.send(payload)
    }
}

impl Default for UdpSink {
    fn default() -> Self {
        Self::new(NetConfig::default())
    }
}

impl RecordSink for UdpSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Live
    }

    fn deliver(&mut self, record: &Record) -> io::Result<()> {
        let line = record.to_string();
        match self.send(line.as_bytes()) {
            Ok(_) => log::debug!("Sent {} to {}", line, self.config.endpoint()),
            Err(e) => log::warn!("UDP send to {} failed: {}", self.config.endpoint(), e),
        }
        Ok(())
    }
}

/// Resolve the endpoint, preferring IPv4 the way a default UDP client does.
fn resolve(config: &NetConfig) -> io::Result<SocketAddr> {
    let addrs: Vec<SocketAddr> = (config.host.as_str(), config.port).to_socket_addrs()?.collect();
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no address for {}", config.endpoint())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_ipv4() {
        let addr = resolve(&NetConfig::default()).unwrap();
        assert!(addr.is_ipv4());
        assert_eq!(addr.port(), 10001);
    }

    #[test]
    fn test_unresolvable_host_is_not_an_error() {
        let mut sink = UdpSink::new(NetConfig {
            host: "host.invalid".to_string(),
            port: 10001,
        });
        assert!(sink.deliver(&Record::new("opacity", "1")).is_ok());
    }
}
