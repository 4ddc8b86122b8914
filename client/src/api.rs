//! HTTP calls to the character persistence and chat completion services.

use crate::error::{ClientError, ClientResult};
use reqwest::{Client, Response};
use shared::models::{Character, CompletionRequest, CompletionResponse};

/// Turns a non-success status into `ClientError::Status`, keeping the body
/// for the notification text.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

pub async fn fetch_characters(http: &Client, url: &str) -> ClientResult<Vec<Character>> {
    let response = check(http.get(url).send().await?).await?;
    Ok(response.json().await?)
}

pub async fn create_character(
    http: &Client,
    url: &str,
    character: &Character,
) -> ClientResult<Character> {
    let response = check(http.post(url).json(character).send().await?).await?;
    Ok(response.json().await?)
}

pub async fn request_completion(
    http: &Client,
    url: &str,
    message: &str,
    character: &Character,
) -> ClientResult<String> {
    let body = CompletionRequest {
        message: message.to_string(),
        character: character.clone(),
    };
    let response = check(http.post(url).json(&body).send().await?).await?;
    let reply: CompletionResponse = response.json().await?;
    Ok(reply.message)
}
