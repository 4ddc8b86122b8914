use super::{Database, DbResult};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::Character;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Serialize, Deserialize, Default, Clone)]
struct LocalData {
    characters: Vec<Character>,
}

/// JSON file store. Characters are kept in insertion order and the whole
/// file is rewritten on every insert.
pub struct LocalDatabase {
    path: PathBuf,
    data: RwLock<LocalData>,
}

impl LocalDatabase {
    pub async fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => LocalData::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::info!("Opened local character store at {}", path.display());

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    async fn save(&self, data: &LocalData) -> DbResult<()> {
        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl Database for LocalDatabase {
    async fn get_characters(&self) -> DbResult<Vec<Character>> {
        let data = self.data.read().await;
        Ok(data.characters.iter().rev().cloned().collect())
    }

    async fn create_character(&self, mut character: Character) -> DbResult<Character> {
        character.created_at = Some(Utc::now());

        let mut data = self.data.write().await;
        data.characters.push(character.clone());
        if let Err(e) = self.save(&data).await {
            data.characters.pop();
            return Err(e);
        }
        Ok(character)
    }
}
