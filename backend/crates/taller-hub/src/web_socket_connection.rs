use crate::{
    ClientEvent, ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult, ShutdownGuard,
    UidHub, WsError,
};

use std::panic::Location;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

/// Drives one upgraded socket: a reader loop here, a writer task draining the queue
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    hub: UidHub,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        hub: UidHub,
        config: ConnectionConfig,
        metrics: Metrics,
    ) -> Self {
        Self {
            connection_id,
            hub,
            config,
            metrics,
        }
    }

    /// Run the connection until the peer leaves or the server shuts down.
    ///
    /// `tx`/`rx` are the two ends of the queue registered with the hub at upgrade time.
    pub async fn handle(
        self,
        socket: WebSocket,
        tx: mpsc::Sender<Message>,
        mut rx: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        let (mut ws_sender, mut ws_receiver) = socket.split();

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        if !self
            .hub
            .open(self.connection_id, self.config.send_latest_on_connect)
            .await
        {
            send_task.abort();
            return Err(WsError::Internal {
                message: format!("connection {} missing from hub", self.connection_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.metrics.connection_established();
        log::info!("WebSocket connection {} open", self.connection_id);

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if matches!(self.handle_event(ClientEvent::from(msg), &tx).await, ControlFlow::Stop) {
                                break Ok(());
                            }
                        }
                        Some(Err(e)) => {
                            log::warn!("WebSocket error on connection {}: {}", self.connection_id, e);
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.try_send(Message::Close(None));
                    break Ok(());
                }
            }
        };

        self.hub.mark_closing(self.connection_id).await;
        self.hub.unregister(self.connection_id).await;
        // Last sender gone: the writer flushes what is queued and exits
        drop(tx);
        if !Self::drain_writer(send_task, self.config.writer_drain_timeout).await {
            log::warn!(
                "Writer for connection {} stalled, aborted after {:?}",
                self.connection_id,
                self.config.writer_drain_timeout
            );
        }

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    async fn handle_event(&self, event: ClientEvent, tx: &mpsc::Sender<Message>) -> ControlFlow {
        match event {
            ClientEvent::Identifier(identifier) => {
                log::debug!(
                    "Identifier from connection {} ({} bytes)",
                    self.connection_id,
                    identifier.len()
                );
                self.hub.receive(identifier).await;
                ControlFlow::Continue
            }
            ClientEvent::Ping(data) => {
                if let Err(e) = Self::queue(tx, Message::Pong(data)) {
                    log::warn!("Pong to connection {} dropped: {}", self.connection_id, e);
                    self.metrics.error_occurred("pong_dropped");
                }
                ControlFlow::Continue
            }
            ClientEvent::Pong => ControlFlow::Continue,
            ClientEvent::Close => {
                log::info!("Received close frame from connection {}", self.connection_id);
                ControlFlow::Stop
            }
        }
    }

    /// Wait up to `limit` for the writer to finish; abort it otherwise. Returns false on abort.
    pub(crate) async fn drain_writer(mut send_task: JoinHandle<()>, limit: Duration) -> bool {
        match tokio::time::timeout(limit, &mut send_task).await {
            Ok(_) => true,
            Err(_) => {
                send_task.abort();
                false
            }
        }
    }

    #[track_caller]
    fn queue(tx: &mpsc::Sender<Message>, msg: Message) -> WsErrorResult<()> {
        tx.try_send(msg).map_err(|e| match e {
            TrySendError::Full(_) => WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            },
            TrySendError::Closed(_) => WsError::ConnectionClosed {
                reason: String::from("writer task stopped"),
                location: ErrorLocation::from(Location::caller()),
            },
        })
    }
}

enum ControlFlow {
    Continue,
    Stop,
}
