use error_location::ErrorLocation;
use thiserror::Error;

/// Connection-level failures. Logged per connection, never sent to clients.
#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, WsError>;
