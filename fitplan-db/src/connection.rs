use std::{env, sync::Arc};

use dotenv::dotenv;
use log::debug;
use sqlx::{Connection as SqlxConnection, Executor, SqliteConnection};
use tokio::sync::{Mutex, MutexGuard};

use crate::schema;

const SETUP_QUERY: &str = "PRAGMA mmap_size = 30000000000;
PRAGMA cache_size = -1000;
PRAGMA page_size = 4096;
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error("profile store error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct Connection {
    inner: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    /// Connects to the database named by `DATABASE_URL`, reading `.env` if
    /// present.
    pub async fn establish() -> Result<Self, StoreError> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").map_err(|_| StoreError::MissingUrl)?;
        Self::open(&database_url).await
    }

    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        debug!("Opening profile store at {}", database_url);
        let mut connection = SqliteConnection::connect(database_url).await?;

        connection.execute(SETUP_QUERY).await?;
        connection.execute(schema::CREATE_PROFILES).await?;

        Ok(Self {
            inner: Arc::new(Mutex::new(connection)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.inner.lock().await
    }
}
