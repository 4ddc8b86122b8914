use crate::AppState;
use crate::openai;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::models::{CompletionRequest, CompletionResponse};

pub async fn complete_chat(
    State(state): State<AppState>,
    Json(payload): Json<CompletionRequest>,
) -> Response {
    if state.completion.api_key.is_empty() {
        return (StatusCode::UNAUTHORIZED, "Missing API Key").into_response();
    }

    match openai::complete(&state.completion, &payload.character, &payload.message).await {
        Ok(Some(message)) => Json(CompletionResponse { message }).into_response(),
        Ok(None) => {
            tracing::error!("Completion for {} returned no content", payload.character.name);
            (StatusCode::BAD_GATEWAY, "Empty completion").into_response()
        }
        Err(e) => {
            tracing::error!("OpenAI Error: {}", e);
            (StatusCode::BAD_GATEWAY, format!("OpenAI Error: {}", e)).into_response()
        }
    }
}
