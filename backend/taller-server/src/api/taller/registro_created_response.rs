use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct RegistroCreatedResponse {
    pub message: &'static str,
    pub id: i64,
    /// Echoed as sent (`"7"` stays a string)
    pub usuario_id: Value,
    pub fecha: String,
    pub hora: String,
}
