use taller_config::WebSocketConfig;

use std::time::Duration;

const DEFAULT_WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-connection settings taken from the `[websocket]` section
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Capacity of each connection's outbound queue
    pub send_buffer_size: usize,
    /// Push the latest identifier as soon as a connection opens
    pub send_latest_on_connect: bool,
    /// How long a closing connection waits for its writer before aborting it
    pub writer_drain_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from(&WebSocketConfig::default())
    }
}

impl From<&WebSocketConfig> for ConnectionConfig {
    fn from(config: &WebSocketConfig) -> Self {
        Self {
            send_buffer_size: config.send_buffer_size,
            send_latest_on_connect: config.send_latest_on_connect,
            writer_drain_timeout: DEFAULT_WRITER_DRAIN_TIMEOUT,
        }
    }
}
