pub mod dbs;
mod handlers;
mod openai;

use crate::dbs::{Database, DatabaseConfig, DbResult};
use crate::handlers::{complete_chat, create_character, list_characters};
use axum::{
    Router,
    routing::{get, post},
};
use shared::models::CompletionSettings;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub completion: Arc<CompletionSettings>,
}

/// Connects the configured store and mounts the API onto `router`.
pub async fn init(
    router: Router<AppState>,
    database: &DatabaseConfig,
    completion: CompletionSettings,
) -> DbResult<Router<()>> {
    let state = AppState {
        db: database.connect().await?,
        completion: Arc::new(completion),
    };
    Ok(routes(router, state))
}

pub fn routes(router: Router<AppState>, state: AppState) -> Router<()> {
    router
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route("/api/chat", post(complete_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
