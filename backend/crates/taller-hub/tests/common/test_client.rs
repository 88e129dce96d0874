use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use tokio::time::{Duration, timeout};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;
        Self { ws }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    pub async fn receive_text(&mut self) -> String {
        timeout(Duration::from_secs(2), self.ws.receive_text())
            .await
            .expect("timed out waiting for a text frame")
    }

    /// None when nothing arrives within `wait`
    pub async fn try_receive_text(&mut self, wait: Duration) -> Option<String> {
        timeout(wait, self.ws.receive_text()).await.ok()
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
