use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_AVATAR: &str = "😊";
pub const DEFAULT_AGE: &str = "25";
pub const DEFAULT_GENDER: &str = "Any";

/// Glyphs offered by the avatar picker.
pub const AVATAR_GLYPHS: [&str; 16] = [
    "😊", "😎", "😈", "👩‍🦰", "🧑", "👨‍💼", "👩‍💻", "🦸", "🧙‍♂️", "🧚", "💋", "🔥", "😏", "🌹", "💃", "🕺",
];

pub const GENDER_OPTIONS: [&str; 4] = ["Male", "Female", "Non-binary", "Any"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub appearance: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    /// Short blurb used instead of `personality` by simpler profiles
    pub description: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub communication_style: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub nsfw_preferences: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Assigned by the persistence service
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            name: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            age: DEFAULT_AGE.to_string(),
            gender: DEFAULT_GENDER.to_string(),
            appearance: String::new(),
            personality: String::new(),
            description: String::new(),
            background: String::new(),
            communication_style: String::new(),
            interests: String::new(),
            nsfw_preferences: String::new(),
            created_at: None,
        }
    }
}

impl Character {
    /// The persona's character sketch: `personality`, or `description` when
    /// the profile only carries a description.
    pub fn summary(&self) -> &str {
        if self.personality.trim().is_empty() {
            &self.description
        } else {
            &self.personality
        }
    }

    /// Whether this profile may enter a catalog: a name and a sketch are required.
    pub fn is_admissible(&self) -> bool {
        !self.name.trim().is_empty() && !self.summary().trim().is_empty()
    }

    /// Mutable access to a single draft field.
    pub fn field_mut(&mut self, field: CharacterField) -> &mut String {
        match field {
            CharacterField::Name => &mut self.name,
            CharacterField::Avatar => &mut self.avatar,
            CharacterField::Age => &mut self.age,
            CharacterField::Gender => &mut self.gender,
            CharacterField::Appearance => &mut self.appearance,
            CharacterField::Personality => &mut self.personality,
            CharacterField::Description => &mut self.description,
            CharacterField::Background => &mut self.background,
            CharacterField::CommunicationStyle => &mut self.communication_style,
            CharacterField::Interests => &mut self.interests,
            CharacterField::NsfwPreferences => &mut self.nsfw_preferences,
        }
    }
}

/// Every user-editable field of a character profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterField {
    Name,
    Avatar,
    Age,
    Gender,
    Appearance,
    Personality,
    Description,
    Background,
    CommunicationStyle,
    Interests,
    NsfwPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let character = Character {
            name: "Alex".into(),
            communication_style: "dry".into(),
            nsfw_preferences: "none".into(),
            ..Character::default()
        };
        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["communicationStyle"], "dry");
        assert_eq!(json["nsfwPreferences"], "none");
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let character: Character = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","name":"Kim","avatar":"😎"}"#,
        )
        .unwrap();
        assert_eq!(character.personality, "");
        assert_eq!(character.created_at, None);
    }

    #[test]
    fn summary_falls_back_to_description() {
        let mut character = Character {
            name: "Kim".into(),
            description: "a quiet librarian".into(),
            ..Character::default()
        };
        assert_eq!(character.summary(), "a quiet librarian");
        assert!(character.is_admissible());

        character.personality = "bold".into();
        assert_eq!(character.summary(), "bold");
    }

    #[test]
    fn blank_fields_are_not_admissible() {
        let character = Character {
            name: "   ".into(),
            personality: "calm".into(),
            ..Character::default()
        };
        assert!(!character.is_admissible());

        let character = Character {
            name: "Alex".into(),
            personality: " \n".into(),
            ..Character::default()
        };
        assert!(!character.is_admissible());
    }

    #[test]
    fn defaults_use_the_any_gender() {
        let character = Character::default();
        assert_eq!(character.avatar, DEFAULT_AVATAR);
        assert_eq!(character.gender, "Any");
        assert!(GENDER_OPTIONS.contains(&character.gender.as_str()));
        assert!(AVATAR_GLYPHS.contains(&character.avatar.as_str()));
    }
}
