use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_INITIAL_UID, DEFAULT_SEND_BUFFER_SIZE,
    MAX_SEND_BUFFER_SIZE, MIN_SEND_BUFFER_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outbound frames buffered per connection before new ones are dropped
    pub send_buffer_size: usize,
    /// Placeholder held as the latest UID until a reader sends one
    pub initial_uid: String,
    /// Push the latest UID to a connection as soon as it opens
    pub send_latest_on_connect: bool,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            initial_uid: String::from(DEFAULT_INITIAL_UID),
            send_latest_on_connect: false,
        }
    }
}

impl WebSocketConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SEND_BUFFER_SIZE..=MAX_SEND_BUFFER_SIZE).contains(&self.send_buffer_size) {
            return Err(ConfigError::websocket(format!(
                "websocket.send_buffer_size must be {}-{}, got {}",
                MIN_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, self.send_buffer_size
            )));
        }

        Ok(())
    }
}
