#![allow(dead_code)]

use taller_core::Stamp;

use sqlx::SqlitePool;

/// Builds a stamp from literal date and time strings
pub fn stamp(fecha: &str, hora: &str) -> Stamp {
    Stamp {
        fecha: fecha.to_string(),
        hora: hora.to_string(),
    }
}

/// Inserts a raw check-in row, bypassing the repository
pub async fn insert_registro(pool: &SqlitePool, usuario_id: i64, fecha: &str, hora: &str) {
    // Use sqlx::query (not the repository) so fixtures don't depend on the code under test
    sqlx::query("INSERT INTO taller (usuario_id, fecha, hora) VALUES (?, ?, ?)")
        .bind(usuario_id)
        .bind(fecha)
        .bind(hora)
        .execute(pool)
        .await
        .expect("Failed to insert test registro");
}
