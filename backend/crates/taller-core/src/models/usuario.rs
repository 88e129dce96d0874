use serde::{Deserialize, Serialize};

/// A row of the `usuarios` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    /// Badge UID assigned to the user, if any
    pub uuid: Option<String>,
}

/// Projection returned when a user is looked up by badge UID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioResumen {
    pub id: i64,
    pub nombre: String,
}
