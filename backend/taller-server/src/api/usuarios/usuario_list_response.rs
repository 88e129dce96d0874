use taller_core::Usuario;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsuarioListResponse {
    pub message: &'static str,
    pub usuarios: Vec<Usuario>,
}
