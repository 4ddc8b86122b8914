use super::character::Character;
use serde::{Deserialize, Serialize};

/// Body of a chat completion call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub message: String,
    pub character: Character,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletionResponse {
    pub message: String,
}
