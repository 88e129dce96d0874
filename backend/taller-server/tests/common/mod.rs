#![allow(dead_code)]

//! Test infrastructure for taller-server API tests

use taller_core::{FixedClock, SharedClock};
use taller_hub::{AppState, ConnectionConfig, Metrics, ShutdownCoordinator, UidHub};

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Instant the injected clock is frozen at
pub const NOW: &str = "2024-01-15 14:30:00";

/// In-memory SQLite with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = taller_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    taller_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_at(NOW).await
}

/// AppState whose clock reads `now` (`YYYY-MM-DD HH:MM:SS`)
pub async fn create_test_app_state_at(now: &str) -> AppState {
    let pool = create_test_pool().await;
    let clock: SharedClock = Arc::new(FixedClock::parse(now).expect("valid test timestamp"));
    let metrics = Metrics::new();

    AppState {
        pool,
        hub: UidHub::new("Esperando UID...", metrics.clone()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        clock,
    }
}

/// Router with a static directory that does not exist
pub fn test_router(state: AppState) -> Router {
    taller_server::build_router(state, Path::new("does-not-exist"))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn insert_usuario(pool: &SqlitePool, nombre: &str, uuid: Option<&str>) -> i64 {
    sqlx::query("INSERT INTO usuarios (nombre, uuid) VALUES (?, ?)")
        .bind(nombre)
        .bind(uuid)
        .execute(pool)
        .await
        .expect("Failed to insert test usuario")
        .last_insert_rowid()
}

pub async fn insert_registro(pool: &SqlitePool, usuario_id: i64, fecha: &str, hora: &str) {
    sqlx::query("INSERT INTO taller (usuario_id, fecha, hora) VALUES (?, ?, ?)")
        .bind(usuario_id)
        .bind(fecha)
        .bind(hora)
        .execute(pool)
        .await
        .expect("Failed to insert test registro");
}
