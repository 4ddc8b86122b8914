use async_trait::async_trait;
use shared::models::Character;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub mod local;
pub mod postgres;

pub use local::LocalDatabase;
pub use postgres::PostgresDatabase;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Clone, Debug)]
pub enum DatabaseConfig {
    Local { path: PathBuf },
    Postgres { url: String },
}

impl DatabaseConfig {
    pub async fn connect(&self) -> DbResult<Arc<dyn Database>> {
        match self {
            DatabaseConfig::Local { path } => Ok(Arc::new(LocalDatabase::open(path).await?)),
            DatabaseConfig::Postgres { url } => Ok(Arc::new(PostgresDatabase::connect(url).await?)),
        }
    }
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Storage file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait Database: Send + Sync {
    /// All stored characters, newest first.
    async fn get_characters(&self) -> DbResult<Vec<Character>>;
    /// Stores a character and returns the stored representation.
    async fn create_character(&self, character: Character) -> DbResult<Character>;
}
