use serde::Deserialize;
use serde_json::Value;

/// POST /api/taller body
#[derive(Debug, Default, Deserialize)]
pub struct CreateRegistroRequest {
    /// Integer id, or a string holding one
    #[serde(default)]
    pub usuario_id: Option<Value>,
}
