use serde::{Deserialize, Serialize};

/// Where live records are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetConfig {
    /// Host the runtime layer listens on.
    pub host: String,
    /// UDP port the runtime layer listens on.
    pub port: u16,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 10001,
        }
    }
}

impl NetConfig {
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
