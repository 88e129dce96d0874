use serde::Serialize;

/// Body carrying only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
