use taller_core::RegistroTaller;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegistrosHoyResponse {
    pub message: &'static str,
    /// Local date the rows were selected for
    pub fecha: String,
    pub datos: Vec<RegistroTaller>,
}
