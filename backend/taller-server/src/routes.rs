use crate::{
    buscar_usuario, create_registro, create_usuario, health, lista_usuarios, list_usuarios,
    registros_hoy, resumen_ultimos_dias, update_usuario_uuid,
};

use taller_hub::AppState;

use std::path::Path;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

/// Build the application router: `/ws`, `/api`, probes, and the static site as fallback
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Badge reader + viewers
        .route("/ws", get(taller_hub::handler))
        // Usuarios
        .route("/api/usuarios", get(list_usuarios).post(create_usuario))
        .route("/api/usuarios/lista", get(lista_usuarios))
        .route("/api/usuarios/buscar/{uuid}", get(buscar_usuario))
        .route("/api/usuarios/{id}/uuid", put(update_usuario_uuid))
        // Taller
        .route("/api/taller", post(create_registro))
        .route("/api/taller/hoy", get(registros_hoy))
        .route("/api/taller/ultimos-10-dias", get(resumen_ultimos_dias))
        // Probes
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}
