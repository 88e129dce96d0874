use crate::Result as DbErrorResult;

use taller_core::{ConteoDiario, RegistroTaller, Stamp};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct RegistroTallerRow {
    id: i64,
    usuario_id: i64,
    fecha: String,
    hora: String,
}

impl From<RegistroTallerRow> for RegistroTaller {
    fn from(r: RegistroTallerRow) -> Self {
        Self {
            id: r.id,
            usuario_id: r.usuario_id,
            fecha: r.fecha,
            hora: r.hora,
        }
    }
}

#[derive(FromRow)]
struct ConteoDiarioRow {
    fecha: String,
    cantidad: i64,
}

/// Queries over the `taller` check-in table
pub struct TallerRepository;

impl TallerRepository {
    /// Record a check-in and return its generated id
    pub async fn create(
        pool: &SqlitePool,
        usuario_id: i64,
        stamp: &Stamp,
    ) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO taller (usuario_id, fecha, hora)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(usuario_id)
        .bind(&stamp.fecha)
        .bind(&stamp.hora)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_fecha(
        pool: &SqlitePool,
        fecha: &str,
    ) -> DbErrorResult<Vec<RegistroTaller>> {
        let rows = sqlx::query_as::<_, RegistroTallerRow>(
            r#"
            SELECT id, usuario_id, fecha, hora
            FROM taller
            WHERE fecha = ?
            ORDER BY id ASC
            "#,
        )
        .bind(fecha)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(RegistroTaller::from).collect())
    }

    /// Check-ins per date on or after `desde`, newest date first
    pub async fn count_by_fecha_since(
        pool: &SqlitePool,
        desde: &str,
    ) -> DbErrorResult<Vec<ConteoDiario>> {
        let rows = sqlx::query_as::<_, ConteoDiarioRow>(
            r#"
            SELECT fecha, COUNT(*) AS cantidad
            FROM taller
            WHERE fecha >= ?
            GROUP BY fecha
            ORDER BY fecha DESC
            "#,
        )
        .bind(desde)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ConteoDiario {
                fecha: r.fecha,
                cantidad: r.cantidad,
            })
            .collect())
    }
}
