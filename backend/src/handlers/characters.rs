use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};
use shared::models::Character;
use uuid::Uuid;

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, StatusCode> {
    let characters = state.db.get_characters().await.map_err(|e| {
        tracing::error!("Failed to list characters: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(characters))
}

pub async fn create_character(
    State(state): State<AppState>,
    Json(mut payload): Json<Character>,
) -> Result<(StatusCode, Json<Character>), StatusCode> {
    if !payload.is_admissible() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    if payload.id.is_nil() {
        payload.id = Uuid::now_v7();
    }

    let stored = state.db.create_character(payload).await.map_err(|e| {
        tracing::error!("Failed to create character: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    tracing::info!("Stored character {} ({})", stored.name, stored.id);

    Ok((StatusCode::CREATED, Json(stored)))
}
