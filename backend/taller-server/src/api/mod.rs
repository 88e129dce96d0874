pub mod error;
pub mod message_response;
pub mod presence;
pub mod taller;
pub mod usuarios;
