#![allow(dead_code)]

use taller_core::{FixedClock, SharedClock};
use taller_hub::{AppState, ConnectionConfig, Metrics, ShutdownCoordinator, UidHub};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

pub const INITIAL_UID: &str = "Esperando UID...";

/// Test server plus the state it was built from, so tests can inspect the hub
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

pub async fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(ConnectionConfig::default()).await
}

pub async fn create_test_server_with_config(config: ConnectionConfig) -> TestServerWithState {
    let app_state = create_app_state(config).await;
    let router = Router::new()
        .route("/ws", get(taller_hub::handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

async fn create_app_state(config: ConnectionConfig) -> AppState {
    let pool = taller_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let clock: SharedClock =
        Arc::new(FixedClock::parse("2024-01-15 14:30:00").expect("valid timestamp"));
    let metrics = Metrics::default();

    AppState {
        pool,
        hub: UidHub::new(INITIAL_UID, metrics.clone()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config,
        clock,
    }
}

/// Poll until the hub reports `expected` open connections
pub async fn wait_for_open(hub: &UidHub, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while hub.open_count().await != expected {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for {expected} open connection(s)"
        );
        sleep(Duration::from_millis(10)).await;
    }
}

/// Poll until the hub has `expected` registered connections in any state
pub async fn wait_for_registered(hub: &UidHub, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while hub.connection_count().await != expected {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for {expected} registered connection(s)"
        );
        sleep(Duration::from_millis(10)).await;
    }
}

/// Poll until the hub's latest identifier equals `expected`
pub async fn wait_for_latest(hub: &UidHub, expected: &str) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while hub.latest().await != expected {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for latest identifier {expected:?}"
        );
        sleep(Duration::from_millis(10)).await;
    }
}
