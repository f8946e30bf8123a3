use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::StorageError,
    repository::{init_db, DbState, EntryRepository},
};

/// Application state shared across request handlers
pub struct AppState {
    pub config: Config,
    pub entries: EntryRepository,
    _db_state: DbState,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>, StorageError> {
        Self::with_config(Config::load()).await
    }

    pub async fn with_config(config: Config) -> Result<Arc<Self>, StorageError> {
        let db_state = init_db(&config.database_path).await?;
        let entries = EntryRepository::new(Arc::new(Mutex::new(db_state.connection())));

        Ok(Arc::new(Self {
            config,
            entries,
            _db_state: db_state,
        }))
    }
}
