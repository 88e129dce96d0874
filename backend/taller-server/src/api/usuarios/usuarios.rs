//! User REST API handlers

use crate::api::presence::{body_or_default, required_text};
use crate::{
    ApiError, ApiResult, CreateUsuarioRequest, MessageResponse, UpdateUuidRequest,
    UsuarioCreatedResponse, UsuarioFoundResponse, UsuarioListResponse,
};

use taller_core::Usuario;
use taller_db::UsuarioRepository;
use taller_hub::AppState;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

const USUARIO_NO_ENCONTRADO: &str = "Usuario no encontrado";

/// GET /api/usuarios
///
/// Every user row, as a bare array
pub async fn list_usuarios(State(state): State<AppState>) -> ApiResult<Json<Vec<Usuario>>> {
    let usuarios = UsuarioRepository::find_all(&state.pool).await?;
    Ok(Json(usuarios))
}

/// GET /api/usuarios/lista
pub async fn lista_usuarios(
    State(state): State<AppState>,
) -> ApiResult<Json<UsuarioListResponse>> {
    let usuarios = UsuarioRepository::find_all(&state.pool).await?;
    info!("Listed {} usuarios", usuarios.len());

    Ok(Json(UsuarioListResponse {
        message: "Lista de usuarios obtenida correctamente",
        usuarios,
    }))
}

/// GET /api/usuarios/buscar/{uuid}
pub async fn buscar_usuario(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<UsuarioFoundResponse>> {
    info!("Looking up usuario by uuid {}", uuid);

    let usuario = UsuarioRepository::find_by_uuid(&state.pool, &uuid)
        .await?
        .ok_or_else(|| ApiError::not_found(USUARIO_NO_ENCONTRADO))?;

    Ok(Json(UsuarioFoundResponse {
        message: "Usuario encontrado",
        usuario,
    }))
}

/// POST /api/usuarios
pub async fn create_usuario(
    State(state): State<AppState>,
    payload: Result<Json<CreateUsuarioRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UsuarioCreatedResponse>)> {
    let request = body_or_default(payload);

    let nombre = required_text(request.nombre.as_ref())
        .ok_or_else(|| ApiError::validation("El nombre es obligatorio", "nombre"))?;
    let stored_uuid = required_text(request.uuid.as_ref());

    let id = UsuarioRepository::create(&state.pool, &nombre, stored_uuid.as_deref()).await?;
    info!("Created usuario {} ({})", id, nombre);

    Ok((
        StatusCode::CREATED,
        Json(UsuarioCreatedResponse {
            id,
            nombre,
            uuid: request.uuid,
            message: "Usuario agregado correctamente",
        }),
    ))
}

/// PUT /api/usuarios/{id}/uuid
///
/// An id that is not an integer can match no row, so it is a 404 like any unknown id.
pub async fn update_usuario_uuid(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUuidRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let request = body_or_default(payload);

    let uuid = required_text(request.uuid.as_ref())
        .ok_or_else(|| ApiError::validation("El UUID es obligatorio", "uuid"))?;

    let Ok(usuario_id) = id.trim().parse::<i64>() else {
        return Err(ApiError::not_found(USUARIO_NO_ENCONTRADO));
    };

    let updated = UsuarioRepository::update_uuid(&state.pool, usuario_id, &uuid).await?;
    if updated == 0 {
        return Err(ApiError::not_found(USUARIO_NO_ENCONTRADO));
    }

    info!("Updated uuid of usuario {}", usuario_id);
    Ok(Json(MessageResponse {
        message: "UUID actualizado correctamente",
    }))
}
