use taller_core::ConteoDiario;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResumenResponse {
    pub message: &'static str,
    pub datos: Vec<ConteoDiario>,
}
