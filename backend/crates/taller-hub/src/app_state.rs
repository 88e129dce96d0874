use crate::{
    ConnectionConfig, ConnectionId, Metrics, ShutdownCoordinator, UidHub, WebSocketConnection,
    create_connection_span,
};

use taller_core::SharedClock;
use taller_db::SqlitePool;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use log::{error, info};
use tokio::sync::mpsc;
use tracing::Instrument;

/// State shared by the WebSocket upgrade handler and the REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub hub: UidHub,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    /// Source of `fecha`/`hora` for attendance rows
    pub clock: SharedClock,
}

/// GET /ws
///
/// Registers the connection as `Connecting` before the upgrade completes; a
/// failed upgrade removes it again. No handshake payload, no authentication.
pub async fn handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let (tx, rx) = mpsc::channel::<Message>(state.config.send_buffer_size);
    let connection_id = state.hub.register(tx.clone()).await;

    let failed_hub = state.hub.clone();
    ws.on_failed_upgrade(move |e| {
        error!("WebSocket upgrade failed for connection {connection_id}: {e}");
        tokio::spawn(async move { failed_hub.unregister(connection_id).await });
    })
    .on_upgrade(move |socket| {
        handle_socket(socket, connection_id, tx, rx, state)
            .instrument(create_connection_span(connection_id))
    })
}

async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        state.hub.clone(),
        state.config.clone(),
        state.metrics.clone(),
    );

    let result = connection.handle(socket, tx, rx, shutdown_guard).await;

    // Already removed on the normal path; covers early returns
    state.hub.unregister(connection_id).await;

    match result {
        Ok(()) => info!("Connection {connection_id} finished"),
        Err(e) => error!("Connection {connection_id} error: {e}"),
    }
}
