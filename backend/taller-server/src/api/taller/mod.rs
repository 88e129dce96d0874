pub mod create_registro_request;
pub mod registro_created_response;
pub mod registros_hoy_response;
pub mod resumen_response;
pub mod taller;
