use axum::{Json, Router, http::StatusCode, routing::post};
use backend::{AppState, dbs::LocalDatabase};
use client::{
    CharacterCatalog, CharacterStore, ClientError, HttpCharacterStore, Intent, MessageDispatcher,
    RemoteDispatcher, SessionController, View,
};
use shared::models::{
    Character, CharacterField, ClientSettings, CompletionRequest, CompletionResponse,
    CompletionSettings, Speaker,
};
use std::sync::Arc;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn serve_backend(dir: &tempfile::TempDir) -> String {
    let state = AppState {
        db: Arc::new(
            LocalDatabase::open(dir.path().join("db.json"))
                .await
                .unwrap(),
        ),
        completion: Arc::new(CompletionSettings::default()),
    };
    serve(backend::routes(Router::new(), state)).await
}

/// Completion stub that answers `<message>, said to <name>`.
async fn serve_echo() -> String {
    let app = Router::new().route(
        "/api/chat",
        post(|Json(request): Json<CompletionRequest>| async move {
            Json(CompletionResponse {
                message: format!("{}, said to {}", request.message, request.character.name),
            })
        }),
    );
    serve(app).await
}

fn alex() -> Character {
    Character {
        name: "Alex".into(),
        personality: "calm".into(),
        ..Character::default()
    }
}

#[tokio::test]
async fn characters_round_trip_through_persistence_service() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve_backend(&dir).await;
    let settings = ClientSettings {
        characters_url: Some(format!("{}/api/characters", base)),
        ..ClientSettings::default()
    };

    let mut controller = SessionController::from_settings(&settings);
    assert!(controller.load_catalog().await.is_empty());

    controller.handle(Intent::NewCharacter);
    controller.handle(Intent::EditField {
        field: CharacterField::Name,
        value: "Alex".into(),
    });
    controller.handle(Intent::EditField {
        field: CharacterField::Personality,
        value: "calm".into(),
    });
    let stored = controller.commit_character().await.unwrap();
    assert!(stored.created_at.is_some());
    assert_eq!(controller.view(), &View::Catalog);

    let mut fresh = SessionController::from_settings(&settings);
    let listed = fresh.load_catalog().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
    assert_eq!(listed[0].name, "Alex");
}

#[tokio::test]
async fn newest_character_is_listed_first() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve_backend(&dir).await;
    let store = Arc::new(HttpCharacterStore::new(format!("{}/api/characters", base)));

    let mut catalog = CharacterCatalog::with_store(store.clone());
    catalog.add(alex()).await.unwrap();
    catalog
        .add(Character {
            name: "Sam".into(),
            ..alex()
        })
        .await
        .unwrap();
    assert_eq!(catalog.characters()[0].name, "Sam");

    let mut reloaded = CharacterCatalog::with_store(store);
    let names: Vec<String> = reloaded.load().await.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Sam".to_string(), "Alex".to_string()]);
}

#[tokio::test]
async fn incomplete_character_is_refused_by_both_sides() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve_backend(&dir).await;
    let store = Arc::new(HttpCharacterStore::new(format!("{}/api/characters", base)));
    let incomplete = Character {
        personality: String::new(),
        ..alex()
    };

    let result = store.create(&incomplete).await;
    assert!(matches!(result, Err(ClientError::Status { status: 422, .. })));

    let mut catalog = CharacterCatalog::with_store(store);
    let result = catalog.add(incomplete).await;
    assert!(matches!(result, Err(ClientError::Inadmissible)));
    assert!(catalog.is_empty());
    assert!(catalog.load().await.is_empty());
}

#[tokio::test]
async fn unreachable_persistence_service_leaves_catalog_browsable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut catalog = CharacterCatalog::with_store(Arc::new(HttpCharacterStore::new(format!(
        "http://{}/api/characters",
        addr
    ))));
    assert!(catalog.load().await.is_empty());
}

#[tokio::test]
async fn remote_dispatch_returns_service_message() {
    let base = serve_echo().await;
    let dispatcher = RemoteDispatcher::new(format!("{}/api/chat", base));

    let reply = dispatcher.dispatch("hello", &alex()).await.unwrap();
    assert_eq!(reply, "hello, said to Alex");
}

#[tokio::test]
async fn remote_conversation_appends_reply() {
    let base = serve_echo().await;
    let settings = ClientSettings {
        chat_url: Some(format!("{}/api/chat", base)),
        ..ClientSettings::default()
    };
    let mut controller = SessionController::from_settings(&settings);
    let alice = controller.catalog().characters()[0].id;
    controller.handle(Intent::SelectCharacter(alice));

    controller.submit("hello").await;
    let session = controller.session().unwrap();
    let last = session.transcript().last().unwrap();
    assert_eq!(session.transcript().len(), 3);
    assert_eq!(last.speaker, Speaker::Persona);
    assert_eq!(last.text, "hello, said to Alice");
    assert!(!session.is_pending());
}

#[tokio::test]
async fn error_status_is_a_dispatch_failure() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::BAD_GATEWAY, "OpenAI Error: overloaded") }),
    );
    let base = serve(app).await;
    let dispatcher = RemoteDispatcher::new(format!("{}/api/chat", base));

    let error = dispatcher.dispatch("hello", &alex()).await.unwrap_err();
    match error {
        ClientError::Status { status, body } => {
            assert_eq!(status, 502);
            assert!(body.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_reply_clears_pending_without_appending() {
    let app = Router::new().route("/api/chat", post(|| async { "definitely not json" }));
    let base = serve(app).await;
    let settings = ClientSettings {
        chat_url: Some(format!("{}/api/chat", base)),
        ..ClientSettings::default()
    };
    let mut controller = SessionController::from_settings(&settings);
    let alice = controller.catalog().characters()[0].id;
    controller.handle(Intent::SelectCharacter(alice));

    controller.submit("hello").await;
    let session = controller.session().unwrap();
    assert_eq!(session.transcript().len(), 2);
    assert!(!session.is_pending());
    assert!(controller.notice().is_some());
}

#[tokio::test]
async fn backend_chat_requires_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve_backend(&dir).await;
    let dispatcher = RemoteDispatcher::new(format!("{}/api/chat", base));

    let error = dispatcher.dispatch("hello", &alex()).await.unwrap_err();
    assert!(matches!(error, ClientError::Status { status: 401, .. }));
}
