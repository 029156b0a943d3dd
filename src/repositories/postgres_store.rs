//! Almacenamiento PostgreSQL
//!
//! Todos los registros viven en la tabla `fleet_records` como JSONB. Los
//! lotes se aplican dentro de una transacción.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use super::record_store::{PendingWrite, RecordFilter, RecordStore, WriteBatch};
use crate::models::EntityKind;
use crate::utils::errors::AppResult;

const UPSERT_SQL: &str = r#"
    INSERT INTO fleet_records (kind, id, body, updated_at)
    VALUES ($1, $2, $3, NOW())
    ON CONFLICT (kind, id) DO UPDATE SET body = EXCLUDED.body, updated_at = NOW()
"#;

const DELETE_SQL: &str = "DELETE FROM fleet_records WHERE kind = $1 AND id = $2";

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn fetch(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>> {
        let row = sqlx::query("SELECT body FROM fleet_records WHERE kind = $1 AND id = $2")
            .bind(kind.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let Json(body): Json<Value> = row.try_get("body")?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    async fn fetch_all(&self, kind: EntityKind, filter: &RecordFilter) -> AppResult<Vec<Value>> {
        let rows = sqlx::query(
            r#"
            SELECT body FROM fleet_records
            WHERE kind = $1
              AND ($2::text IS NULL OR body->>'vehicle_id' = $2)
              AND ($3::text IS NULL OR (body->>$3) IS NOT NULL)
            ORDER BY updated_at DESC
            "#,
        )
        .bind(kind.as_str())
        .bind(filter.vehicle_id.map(|id| id.to_string()))
        .bind(filter.present_field)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let Json(body): Json<Value> = row.try_get("body")?;
                Ok(body)
            })
            .collect()
    }

    async fn upsert(&self, kind: EntityKind, id: Uuid, body: Value) -> AppResult<()> {
        sqlx::query(UPSERT_SQL)
            .bind(kind.as_str())
            .bind(id)
            .bind(Json(body))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, kind: EntityKind, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(DELETE_SQL)
            .bind(kind.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn apply(&self, batch: WriteBatch) -> AppResult<()> {
        let count = batch.len();
        let mut tx = self.pool.begin().await?;

        for write in batch.into_writes() {
            match write {
                PendingWrite::Put { kind, id, body } => {
                    sqlx::query(UPSERT_SQL)
                        .bind(kind.as_str())
                        .bind(id)
                        .bind(Json(body))
                        .execute(&mut *tx)
                        .await?;
                }
                PendingWrite::Delete { kind, id } => {
                    sqlx::query(DELETE_SQL)
                        .bind(kind.as_str())
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        debug!("💾 Transacción confirmada ({} escrituras)", count);
        Ok(())
    }
}
