pub mod conteo_diario;
pub mod registro_taller;
pub mod usuario;
