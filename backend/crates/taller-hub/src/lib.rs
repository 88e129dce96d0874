pub mod app_state;
pub mod broadcast_outcome;
pub mod client_event;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_state;
pub mod error;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod uid_hub;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use broadcast_outcome::BroadcastOutcome;
pub use client_event::ClientEvent;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_state::ConnectionState;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use uid_hub::UidHub;
pub use web_socket_connection::WebSocketConnection;


use tracing::info_span;

/// Span wrapping one socket task, tagged with its connection id.
///
/// The fern sink only sees `log` records, so log lines still interpolate the id themselves.
pub fn create_connection_span(connection_id: ConnectionId) -> tracing::Span {
    info_span!("ws_connection", connection_id = %connection_id)
}
