use serde::{Deserialize, Serialize};

/// A row of the `taller` table: one badge check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistroTaller {
    pub id: i64,
    pub usuario_id: i64,
    /// Local date, `YYYY-MM-DD`
    pub fecha: String,
    /// Local time, `HH:MM:SS`
    pub hora: String,
}
