pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    message_response::MessageResponse,
    taller::{
        create_registro_request::CreateRegistroRequest,
        registro_created_response::RegistroCreatedResponse,
        registros_hoy_response::RegistrosHoyResponse,
        resumen_response::ResumenResponse,
        taller::{create_registro, registros_hoy, resumen_ultimos_dias},
    },
    usuarios::{
        create_usuario_request::CreateUsuarioRequest,
        update_uuid_request::UpdateUuidRequest,
        usuario_created_response::UsuarioCreatedResponse,
        usuario_found_response::UsuarioFoundResponse,
        usuario_list_response::UsuarioListResponse,
        usuarios::{
            buscar_usuario, create_usuario, list_usuarios, lista_usuarios, update_usuario_uuid,
        },
    },
};

pub use crate::routes::build_router;
