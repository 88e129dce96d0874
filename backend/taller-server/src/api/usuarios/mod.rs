pub mod create_usuario_request;
pub mod update_uuid_request;
pub mod usuario_created_response;
pub mod usuario_found_response;
pub mod usuario_list_response;
pub mod usuarios;
