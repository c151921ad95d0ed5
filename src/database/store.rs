use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::StatusCheck;

/// Errors from a status store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored document could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Narrow persistence seam between the handlers and a document collection.
///
/// Every call maps to exactly one storage round trip. Implementations add no
/// retry, ordering or atomicity guarantees beyond what their backing store
/// provides; `list_all` returns records in insertion order.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Write one record.
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError>;

    /// Read the full collection, unfiltered and unpaginated.
    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError>;

    /// Connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn StatusStore>;
