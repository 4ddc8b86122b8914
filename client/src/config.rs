use crate::catalog::{CharacterCatalog, HttpCharacterStore};
use crate::dispatcher::{MessageDispatcher, RemoteDispatcher, SimulatedDispatcher};
use shared::models::ClientSettings;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Reads settings from a JSON file, falling back to defaults.
pub fn load_settings(path: impl AsRef<Path>) -> ClientSettings {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::info!("No client settings at {} ({}), using defaults", path.display(), e);
            return ClientSettings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
        ClientSettings::default()
    })
}

pub fn catalog_for(settings: &ClientSettings) -> CharacterCatalog {
    match &settings.characters_url {
        Some(url) => CharacterCatalog::with_store(Arc::new(HttpCharacterStore::new(url.clone()))),
        None => CharacterCatalog::seeded(),
    }
}

pub fn dispatcher_for(settings: &ClientSettings) -> Arc<dyn MessageDispatcher> {
    match &settings.chat_url {
        Some(url) => Arc::new(RemoteDispatcher::new(url.clone())),
        None => Arc::new(SimulatedDispatcher::new(Duration::from_millis(
            settings.typing_delay_ms,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path().join("absent.json"));
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert_eq!(load_settings(&path), ClientSettings::default());
    }

    #[test]
    fn urls_are_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(
            &path,
            r#"{"characters_url":"http://localhost:8080/api/characters","typing_delay_ms":10}"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(
            settings.characters_url.as_deref(),
            Some("http://localhost:8080/api/characters")
        );
        assert_eq!(settings.chat_url, None);
        assert_eq!(settings.typing_delay_ms, 10);
        assert!(catalog_for(&settings).is_empty());
    }

    #[test]
    fn no_urls_means_seeded_catalog() {
        assert!(!catalog_for(&ClientSettings::default()).is_empty());
    }
}
