use serde::Serialize;
use serde_json::Value;

/// `uuid` is echoed as sent, and left out only when the request had no `uuid` key
#[derive(Debug, Serialize)]
pub struct UsuarioCreatedResponse {
    pub id: i64,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Value>,
    pub message: &'static str,
}
