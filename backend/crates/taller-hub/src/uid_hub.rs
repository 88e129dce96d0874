use crate::{BroadcastOutcome, ConnectionId, ConnectionInfo, ConnectionState, Metrics};

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::Message;
use log::{debug, info, warn};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::RwLock;

/// Holds the latest badge identifier and every live connection.
///
/// Both live behind one lock: `receive` stores the value and fans it out
/// before releasing, so each viewer sees identifiers in the order the hub
/// accepted them. Fan-out only uses `try_send` and never awaits under the lock.
#[derive(Clone)]
pub struct UidHub {
    inner: Arc<RwLock<HubInner>>,
    metrics: Metrics,
}

struct HubInner {
    latest: String,
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl UidHub {
    pub fn new(initial_uid: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HubInner {
                latest: initial_uid.into(),
                connections: HashMap::new(),
            })),
            metrics,
        }
    }

    /// Add a connection in `Connecting` state
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> ConnectionId {
        let connection_id = ConnectionId::new();
        let mut inner = self.inner.write().await;

        inner
            .connections
            .insert(connection_id, ConnectionInfo::new(sender));
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        connection_id
    }

    /// Move a connection to `Open` so it starts receiving broadcasts.
    ///
    /// With `push_latest` the current identifier is queued to it first, under
    /// the same lock, so it cannot interleave with a concurrent broadcast.
    /// Returns false when the connection is no longer registered.
    pub async fn open(&self, connection_id: ConnectionId, push_latest: bool) -> bool {
        let mut inner = self.inner.write().await;
        let HubInner {
            latest,
            connections,
        } = &mut *inner;

        let Some(info) = connections.get_mut(&connection_id) else {
            return false;
        };

        info.state = ConnectionState::Open;
        if push_latest
            && info
                .sender
                .try_send(Message::Text(latest.clone().into()))
                .is_err()
        {
            warn!("Could not push latest identifier to connection {connection_id}");
        }

        debug!("Connection {connection_id} open");
        true
    }

    /// Mark a connection as `Closing`; broadcasts skip it from now on
    pub async fn mark_closing(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;
        if let Some(info) = inner.connections.get_mut(&connection_id) {
            info.state = ConnectionState::Closing;
        }
    }

    /// Drop a connection (and its queue sender) from the registry
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if let Some(info) = inner.connections.remove(&connection_id) {
            info!(
                "Unregistered connection {connection_id} after {}s ({} remaining)",
                info.lifetime().num_seconds(),
                inner.connections.len()
            );
        }
    }

    /// Store `identifier` as the latest value and offer it to every open connection
    pub async fn receive(&self, identifier: String) -> BroadcastOutcome {
        let mut inner = self.inner.write().await;
        let HubInner {
            latest,
            connections,
        } = &mut *inner;

        *latest = identifier;
        self.metrics.identifier_received();

        let mut outcome = BroadcastOutcome::default();
        for (connection_id, info) in connections.iter() {
            if !info.state.is_open() {
                outcome.skipped += 1;
                continue;
            }

            match info.sender.try_send(Message::Text(latest.clone().into())) {
                Ok(()) => outcome.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Send buffer full for connection {connection_id}, frame dropped");
                    outcome.failed += 1;
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Connection {connection_id} writer already gone");
                    outcome.failed += 1;
                }
            }
        }

        self.metrics.frames_delivered(outcome.delivered);
        self.metrics.frames_failed(outcome.failed);
        debug!(
            "Broadcast identifier to {} connection(s) ({} skipped, {} failed)",
            outcome.delivered, outcome.skipped, outcome.failed
        );

        outcome
    }

    pub async fn latest(&self) -> String {
        self.inner.read().await.latest.clone()
    }

    /// Registered connections in any state
    pub async fn connection_count(&self) -> usize {
        self.inner.read().await.connections.len()
    }

    pub async fn open_count(&self) -> usize {
        self.inner
            .read()
            .await
            .connections
            .values()
            .filter(|info| info.state.is_open())
            .count()
    }

    /// `Closed` when the connection is not registered
    pub async fn state_of(&self, connection_id: ConnectionId) -> ConnectionState {
        self.inner
            .read()
            .await
            .connections
            .get(&connection_id)
            .map(|info| info.state)
            .unwrap_or(ConnectionState::Closed)
    }
}
