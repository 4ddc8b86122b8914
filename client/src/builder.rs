use crate::catalog::CharacterCatalog;
use crate::error::ClientResult;
use serde::{Deserialize, Serialize};
use shared::models::{Character, CharacterField};
use uuid::Uuid;

/// Draft profile edited by the character form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterBuilder {
    draft: Character,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a draft handed back by the presentation layer.
    pub fn from_draft(draft: Character) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &Character {
        &self.draft
    }

    pub fn update_field(&mut self, field: CharacterField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn can_commit(&self) -> bool {
        self.draft.is_admissible()
    }

    /// Adds the draft to `catalog` under a fresh id and resets the form.
    ///
    /// Returns `Ok(None)` without touching anything when the draft lacks a
    /// name or personality. On a store failure the draft is kept so the user
    /// can retry.
    pub async fn commit(&mut self, catalog: &mut CharacterCatalog) -> ClientResult<Option<Character>> {
        if !self.can_commit() {
            tracing::debug!("Declined commit of incomplete character draft");
            return Ok(None);
        }

        let character = Character {
            id: Uuid::now_v7(),
            created_at: None,
            ..self.draft.clone()
        };
        let stored = catalog.add(character).await?;
        tracing::info!("Created character {} ({})", stored.name, stored.id);
        self.draft = Character::default();
        Ok(Some(stored))
    }
}
