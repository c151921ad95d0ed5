use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::store::{StatusStore, StoreError};
use crate::models::StatusCheck;

/// Process-local collection. Backs `STORAGE_BACKEND=memory` and the test suites.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    documents: RwLock<Vec<StatusCheck>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated collection, in the given order
    pub fn with_records(records: Vec<StatusCheck>) -> Self {
        Self {
            documents: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        self.documents.write().await.push(record.clone());
        debug!("Inserted status check {} into memory store", record.id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(self.documents.read().await.clone())
    }
}
