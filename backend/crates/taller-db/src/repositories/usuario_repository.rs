use crate::Result as DbErrorResult;

use taller_core::{Usuario, UsuarioResumen};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UsuarioRow {
    id: i64,
    nombre: String,
    uuid: Option<String>,
}

impl From<UsuarioRow> for Usuario {
    fn from(r: UsuarioRow) -> Self {
        Self {
            id: r.id,
            nombre: r.nombre,
            uuid: r.uuid,
        }
    }
}

#[derive(FromRow)]
struct UsuarioResumenRow {
    id: i64,
    nombre: String,
}

/// Queries over the `usuarios` table
pub struct UsuarioRepository;

impl UsuarioRepository {
    pub async fn find_all(pool: &SqlitePool) -> DbErrorResult<Vec<Usuario>> {
        let rows = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id, nombre, uuid
            FROM usuarios
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Usuario::from).collect())
    }

    /// First user holding the given badge UID
    pub async fn find_by_uuid(
        pool: &SqlitePool,
        uuid: &str,
    ) -> DbErrorResult<Option<UsuarioResumen>> {
        let row = sqlx::query_as::<_, UsuarioResumenRow>(
            r#"
            SELECT id, nombre
            FROM usuarios
            WHERE uuid = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(uuid)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| UsuarioResumen {
            id: r.id,
            nombre: r.nombre,
        }))
    }

    /// Insert a user and return its generated id
    pub async fn create(
        pool: &SqlitePool,
        nombre: &str,
        uuid: Option<&str>,
    ) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO usuarios (nombre, uuid)
            VALUES (?, ?)
            "#,
        )
        .bind(nombre)
        .bind(uuid)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Assign a badge UID, returning the number of matched rows
    pub async fn update_uuid(pool: &SqlitePool, id: i64, uuid: &str) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE usuarios
            SET uuid = ?
            WHERE id = ?
            "#,
        )
        .bind(uuid)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
