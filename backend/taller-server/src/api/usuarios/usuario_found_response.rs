use taller_core::UsuarioResumen;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsuarioFoundResponse {
    pub message: &'static str,
    pub usuario: UsuarioResumen,
}
