use async_trait::async_trait;
use futures::TryStreamExt;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use std::time::Duration;
use tracing::{debug, info};

use super::store::{StatusStore, StoreError};
use crate::models::StatusCheck;

/// Status check documents stored as JSONB rows. `seq` is internal to the
/// collection: it fixes scan order and is never surfaced to callers.
pub struct PgStatusStore {
    pool: PgPool,
}

const COLLECTION: &str = "status_checks";

impl PgStatusStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `connection_string`
    pub async fn connect(
        connection_string: &str,
        max_connections: u32,
        acquire_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .connect(connection_string)
            .await
            .map_err(map_sqlx_error)?;

        info!("Created database pool for collection: {}", COLLECTION);
        Ok(Self::new(pool))
    }

    /// Create the collection if it does not exist yet
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {COLLECTION} (
                seq BIGSERIAL PRIMARY KEY,
                id TEXT NOT NULL UNIQUE,
                document JSONB NOT NULL
            )"
        );
        sqlx::query(&ddl).execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl StatusStore for PgStatusStore {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        let query = format!("INSERT INTO {COLLECTION} (id, document) VALUES ($1, $2)");
        sqlx::query(&query)
            .bind(&record.id)
            .bind(Json(record))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!("Inserted status check {}", record.id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError> {
        let query = format!("SELECT document FROM {COLLECTION} ORDER BY seq");
        let mut rows = sqlx::query_scalar::<_, Json<Value>>(&query).fetch(&self.pool);

        let mut records = Vec::new();
        while let Some(Json(document)) = rows.try_next().await.map_err(map_sqlx_error)? {
            records.push(decode_document(document)?);
        }

        debug!("Listed {} status checks", records.len());
        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

/// Map a stored document back to its wire shape, dropping any store-internal keys.
/// Documents imported from the previous document store may still carry `_id`.
fn decode_document(mut document: Value) -> Result<StatusCheck, StoreError> {
    if let Some(object) = document.as_object_mut() {
        object.remove("_id");
    }
    serde_json::from_value(document).map_err(|e| StoreError::Decode(e.to_string()))
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Sqlx(other),
    }
}
