use serde::{Deserialize, Serialize};

/// Number of check-ins recorded on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConteoDiario {
    pub fecha: String,
    pub cantidad: i64,
}
