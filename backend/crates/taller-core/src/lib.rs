pub mod clock;
pub mod error;
pub mod models;


pub use clock::{Clock, FixedClock, LocalClock, SharedClock, Stamp};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::conteo_diario::ConteoDiario;
pub use models::registro_taller::RegistroTaller;
pub use models::usuario::{Usuario, UsuarioResumen};

/// Date format stored in `taller.fecha`
pub const FECHA_FORMAT: &str = "%Y-%m-%d";
/// Time format stored in `taller.hora`
pub const HORA_FORMAT: &str = "%H:%M:%S";
/// Size of the attendance summary window, in days
pub const RESUMEN_DIAS: i64 = 10;
