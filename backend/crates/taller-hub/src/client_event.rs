use axum::extract::ws::Message;
use bytes::Bytes;

/// Inbound frame as the connection task consumes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Any data frame; binary payloads are decoded as lossy UTF-8
    Identifier(String),
    Ping(Bytes),
    Pong,
    Close,
}

impl From<Message> for ClientEvent {
    fn from(msg: Message) -> Self {
        match msg {
            Message::Text(text) => ClientEvent::Identifier(text.as_str().to_owned()),
            Message::Binary(data) => {
                ClientEvent::Identifier(String::from_utf8_lossy(&data).into_owned())
            }
            Message::Ping(data) => ClientEvent::Ping(data),
            Message::Pong(_) => ClientEvent::Pong,
            Message::Close(_) => ClientEvent::Close,
        }
    }
}
