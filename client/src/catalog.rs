use crate::api;
use crate::error::{ClientError, ClientResult};
use crate::seed::seed_characters;
use async_trait::async_trait;
use shared::models::Character;
use std::sync::Arc;
use uuid::Uuid;

/// External persistence for characters.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Character>>;
    /// Stores `character` and returns the service's representation of it.
    async fn create(&self, character: &Character) -> ClientResult<Character>;
}

/// Character persistence service reached over HTTP.
pub struct HttpCharacterStore {
    http: reqwest::Client,
    url: String,
}

impl HttpCharacterStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CharacterStore for HttpCharacterStore {
    async fn list(&self) -> ClientResult<Vec<Character>> {
        api::fetch_characters(&self.http, &self.url).await
    }

    async fn create(&self, character: &Character) -> ClientResult<Character> {
        api::create_character(&self.http, &self.url, character).await
    }
}

/// The personas available for conversation.
///
/// Without a store the catalog lives in memory only, starts from the seed
/// list and keeps insertion order for the life of the process. With a store, `load` fetches the service's
/// listing and new characters are surfaced first.
pub struct CharacterCatalog {
    characters: Vec<Character>,
    store: Option<Arc<dyn CharacterStore>>,
}

impl CharacterCatalog {
    pub fn seeded() -> Self {
        Self {
            characters: seed_characters(),
            store: None,
        }
    }

    /// Starts empty until `load` succeeds.
    pub fn with_store(store: Arc<dyn CharacterStore>) -> Self {
        Self {
            characters: Vec::new(),
            store: Some(store),
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: Uuid) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Refreshes the listing from the store. Without a store, or when the
    /// fetch fails, the current listing is kept as is. Entries missing a name
    /// or sketch are skipped.
    pub async fn load(&mut self) -> &[Character] {
        match &self.store {
            None => {}
            Some(store) => match store.list().await {
                Ok(characters) => {
                    let total = characters.len();
                    self.characters = characters
                        .into_iter()
                        .filter(Character::is_admissible)
                        .collect();
                    if self.characters.len() < total {
                        tracing::warn!(
                            "Skipped {} incomplete characters from the store",
                            total - self.characters.len()
                        );
                    }
                    tracing::info!("Loaded {} characters", self.characters.len());
                }
                Err(e) => {
                    tracing::warn!("Failed to load characters, keeping previous listing: {}", e);
                }
            },
        }
        &self.characters
    }

    /// Adds a character, round-tripping it through the store when one is
    /// configured. Nothing is inserted if the character (or the store's copy
    /// of it) lacks a name or sketch, or if the store call fails.
    pub async fn add(&mut self, character: Character) -> ClientResult<Character> {
        if !character.is_admissible() {
            return Err(ClientError::Inadmissible);
        }
        match &self.store {
            None => {
                self.characters.push(character.clone());
                Ok(character)
            }
            Some(store) => {
                let stored = store.create(&character).await?;
                if !stored.is_admissible() {
                    tracing::error!("Store returned incomplete character {}", stored.id);
                    return Err(ClientError::Inadmissible);
                }
                self.characters.insert(0, stored.clone());
                Ok(stored)
            }
        }
    }
}
