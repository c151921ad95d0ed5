pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStatusStore;
pub use postgres::PgStatusStore;
pub use store::{SharedStore, StatusStore, StoreError};

use std::sync::Arc;
use tracing::info;

use crate::config::{DatabaseConfig, StorageBackend};

/// Build the store selected by configuration. The Postgres collection is
/// created on first start.
pub async fn open_store(config: &DatabaseConfig) -> anyhow::Result<SharedStore> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory status store");
            Ok(Arc::new(MemoryStatusStore::new()))
        }
        StorageBackend::Postgres => {
            let connection_string = config.connection_string()?;
            let store = PgStatusStore::connect(
                &connection_string,
                config.max_connections,
                config.connection_timeout,
            )
            .await?;
            store.ensure_collection().await?;
            Ok(Arc::new(store))
        }
    }
}
