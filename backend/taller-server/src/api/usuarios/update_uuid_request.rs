use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUuidRequest {
    #[serde(default)]
    pub uuid: Option<Value>,
}
