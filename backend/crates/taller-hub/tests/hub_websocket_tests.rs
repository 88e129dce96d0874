mod common;

use common::test_client::WsTestClient;
use common::test_server::{
    INITIAL_UID, create_test_server, create_test_server_with_config, wait_for_latest,
    wait_for_open, wait_for_registered,
};

use taller_hub::ConnectionConfig;

use googletest::assert_that;
use googletest::prelude::eq;
use tokio::time::Duration;

#[tokio::test]
async fn given_viewers_when_producer_sends_uid_then_every_open_socket_receives_it() {
    // Given
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    let mut viewer_a = WsTestClient::connect(&ctx.server).await;
    let mut viewer_b = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 3).await;

    // When
    producer.send_text("A1B2C3").await;

    // Then
    assert_eq!(viewer_a.receive_text().await, "A1B2C3");
    assert_eq!(viewer_b.receive_text().await, "A1B2C3");
    assert_eq!(producer.receive_text().await, "A1B2C3");
    assert_eq!(ctx.app_state.hub.latest().await, "A1B2C3");

    producer.close().await;
    viewer_a.close().await;
    viewer_b.close().await;
}

#[tokio::test]
async fn given_new_connection_when_nothing_sent_then_no_initial_frame() {
    let ctx = create_test_server().await;
    let mut viewer = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 1).await;

    let received = viewer.try_receive_text(Duration::from_millis(200)).await;

    assert_eq!(received, None);
    assert_eq!(ctx.app_state.hub.latest().await, INITIAL_UID);
}

#[tokio::test]
async fn given_late_joiner_when_next_uid_sent_then_receives_only_newer_value() {
    // Given
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 1).await;
    producer.send_text("M1").await;
    assert_eq!(producer.receive_text().await, "M1");

    // When
    let mut late = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 2).await;
    producer.send_text("M2").await;

    // Then
    assert_eq!(late.receive_text().await, "M2");
}

#[tokio::test]
async fn given_sequence_when_sent_then_viewer_receives_in_order_including_duplicates() {
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    let mut viewer = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 2).await;

    for uid in ["U1", "U2", "U2", "U3"] {
        producer.send_text(uid).await;
    }

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(viewer.receive_text().await);
    }
    assert_eq!(seen, vec!["U1", "U2", "U2", "U3"]);
    assert_eq!(ctx.app_state.hub.latest().await, "U3");
}

#[tokio::test]
async fn given_binary_frame_when_sent_then_rebroadcast_as_text() {
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    let mut viewer = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 2).await;

    producer.send_binary(&b"04:A3:2B:9C"[..]).await;

    assert_eq!(viewer.receive_text().await, "04:A3:2B:9C");
    wait_for_latest(&ctx.app_state.hub, "04:A3:2B:9C").await;
}

#[tokio::test]
async fn given_empty_payload_when_sent_then_accepted_as_identifier() {
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 1).await;

    producer.send_text("").await;

    assert_eq!(producer.receive_text().await, "");
    wait_for_latest(&ctx.app_state.hub, "").await;
}

#[tokio::test]
async fn given_viewer_disconnects_when_uid_sent_then_others_still_receive() {
    // Given
    let ctx = create_test_server().await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    let leaving = WsTestClient::connect(&ctx.server).await;
    let mut staying = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 3).await;

    // When
    leaving.close().await;
    producer.send_text("AFTER-CLOSE").await;

    // Then
    assert_eq!(staying.receive_text().await, "AFTER-CLOSE");
    assert_eq!(producer.receive_text().await, "AFTER-CLOSE");
}

#[tokio::test]
async fn given_connected_clients_when_closed_then_registry_empties() {
    let ctx = create_test_server().await;
    let first = WsTestClient::connect(&ctx.server).await;
    let second = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 2).await;

    first.close().await;
    second.close().await;

    wait_for_registered(&ctx.app_state.hub, 0).await;
    assert_that!(ctx.app_state.hub.open_count().await, eq(0));
}

#[tokio::test]
async fn given_send_latest_on_connect_when_viewer_joins_then_receives_current_value() {
    // Given
    let config = ConnectionConfig {
        send_latest_on_connect: true,
        ..ConnectionConfig::default()
    };
    let ctx = create_test_server_with_config(config).await;
    let mut producer = WsTestClient::connect(&ctx.server).await;
    assert_eq!(producer.receive_text().await, INITIAL_UID);
    producer.send_text("CURRENT").await;
    assert_eq!(producer.receive_text().await, "CURRENT");

    // When
    let mut viewer = WsTestClient::connect(&ctx.server).await;

    // Then
    assert_eq!(viewer.receive_text().await, "CURRENT");
}

#[tokio::test]
async fn given_open_connections_when_shutdown_then_tasks_unregister() {
    let ctx = create_test_server().await;
    let _a = WsTestClient::connect(&ctx.server).await;
    let _b = WsTestClient::connect(&ctx.server).await;
    wait_for_open(&ctx.app_state.hub, 2).await;

    ctx.app_state.shutdown.shutdown();

    wait_for_registered(&ctx.app_state.hub, 0).await;
}
