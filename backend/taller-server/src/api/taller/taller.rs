//! Attendance (`taller`) REST API handlers

use crate::api::presence::{body_or_default, required_id};
use crate::{
    ApiError, ApiResult, CreateRegistroRequest, RegistroCreatedResponse, RegistrosHoyResponse,
    ResumenResponse,
};

use taller_core::RESUMEN_DIAS;
use taller_db::TallerRepository;
use taller_hub::AppState;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

/// POST /api/taller
///
/// Records a check-in stamped with the local date and time.
pub async fn create_registro(
    State(state): State<AppState>,
    payload: Result<Json<CreateRegistroRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegistroCreatedResponse>)> {
    let request = body_or_default(payload);

    let usuario_id = required_id(request.usuario_id.as_ref())
        .ok_or_else(|| ApiError::validation("El usuario_id es obligatorio", "usuario_id"))?;

    let stamp = state.clock.stamp();
    let id = TallerRepository::create(&state.pool, usuario_id, &stamp).await?;
    info!(
        "Check-in {} for usuario {} at {} {}",
        id, usuario_id, stamp.fecha, stamp.hora
    );

    Ok((
        StatusCode::CREATED,
        Json(RegistroCreatedResponse {
            message: "Datos guardados en la tabla taller correctamente",
            id,
            usuario_id: request.usuario_id.unwrap_or_default(),
            fecha: stamp.fecha,
            hora: stamp.hora,
        }),
    ))
}

/// GET /api/taller/hoy
pub async fn registros_hoy(State(state): State<AppState>) -> ApiResult<Json<RegistrosHoyResponse>> {
    let fecha = state.clock.today();
    let datos = TallerRepository::find_by_fecha(&state.pool, &fecha).await?;

    Ok(Json(RegistrosHoyResponse {
        message: "Datos de la tabla taller obtenidos correctamente",
        fecha,
        datos,
    }))
}

/// GET /api/taller/ultimos-10-dias
///
/// Check-ins per date from ten days ago (inclusive), newest first
pub async fn resumen_ultimos_dias(
    State(state): State<AppState>,
) -> ApiResult<Json<ResumenResponse>> {
    let desde = state.clock.days_ago(RESUMEN_DIAS);
    let datos = TallerRepository::count_by_fecha_since(&state.pool, &desde).await?;

    Ok(Json(ResumenResponse {
        message: "Datos de los últimos 10 días obtenidos correctamente",
        datos,
    }))
}
