use serde::{Deserialize, Serialize};

pub const DEFAULT_TYPING_DELAY_MS: u64 = 800;

/// Upstream model settings used by the completion service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u16,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://openrouter.ai/api/v1".to_string(),
            model: "tngtech/deepseek-r1t2-chimera:free".to_string(),
            temperature: 0.9,
            max_tokens: 1024,
        }
    }
}

/// Which collaborators the conversation core talks to. Unset URLs select the
/// local variants (seeded catalog, simulated replies).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub characters_url: Option<String>,
    pub chat_url: Option<String>,
    pub typing_delay_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            characters_url: None,
            chat_url: None,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
        }
    }
}
