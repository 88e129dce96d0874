use crate::ConnectionState;

use axum::extract::ws::Message;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;

/// Registry entry for one connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub state: ConnectionState,
    pub connected_at: DateTime<Utc>,
    /// Outbound queue drained by the connection's writer task
    pub sender: mpsc::Sender<Message>,
}

impl ConnectionInfo {
    pub fn new(sender: mpsc::Sender<Message>) -> Self {
        Self {
            state: ConnectionState::Connecting,
            connected_at: Utc::now(),
            sender,
        }
    }

    /// Time elapsed since the connection was registered
    pub fn lifetime(&self) -> Duration {
        Utc::now() - self.connected_at
    }
}
