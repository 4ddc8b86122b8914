use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
};
use shared::models::{Character, CompletionSettings};

/// Persona instructions built from every filled-in profile field.
pub fn system_prompt(character: &Character) -> String {
    let mut prompt = format!(
        "You are {}. Stay in character and answer as {} would.",
        character.name, character.name
    );
    let fields = [
        ("Age", &character.age),
        ("Gender", &character.gender),
        ("Appearance", &character.appearance),
        ("Personality", &character.personality),
        ("Description", &character.description),
        ("Background", &character.background),
        ("Communication style", &character.communication_style),
        ("Interests", &character.interests),
        ("Preferences", &character.nsfw_preferences),
    ];
    for (label, value) in fields {
        if !value.trim().is_empty() {
            prompt.push_str(&format!("\n{}: {}", label, value.trim()));
        }
    }
    prompt
}

fn build_conversation(
    character: &Character,
    message: &str,
) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
    let system = ChatCompletionRequestSystemMessageArgs::default()
        .content(system_prompt(character))
        .build()?;
    let user = ChatCompletionRequestUserMessageArgs::default()
        .content(message)
        .build()?;
    Ok(vec![
        ChatCompletionRequestMessage::System(system),
        ChatCompletionRequestMessage::User(user),
    ])
}

/// One non-streaming completion. `Ok(None)` means the upstream answered
/// without any text.
pub async fn complete(
    settings: &CompletionSettings,
    character: &Character,
    message: &str,
) -> Result<Option<String>, OpenAIError> {
    let config = OpenAIConfig::new()
        .with_api_key(settings.api_key.clone())
        .with_api_base(settings.api_base.clone());
    let client = Client::with_config(config);

    let request = CreateChatCompletionRequestArgs::default()
        .model(settings.model.clone())
        .messages(build_conversation(character, message)?)
        .temperature(settings.temperature)
        .max_tokens(settings.max_tokens)
        .build()?;

    let response = client.chat().create(request).await?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content))
}
