use serde::Deserialize;
use serde_json::Value;

/// POST /api/usuarios body. Fields stay untyped until the presence checks run.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUsuarioRequest {
    #[serde(default)]
    pub nombre: Option<Value>,

    /// Badge UID; missing or empty stores NULL. `None` only when the key is missing.
    #[serde(default, deserialize_with = "crate::api::presence::sent_value")]
    pub uuid: Option<Value>,
}
