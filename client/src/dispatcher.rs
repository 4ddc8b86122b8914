use crate::api;
use crate::error::ClientResult;
use async_trait::async_trait;
use rand::Rng;
use shared::models::{Character, DEFAULT_TYPING_DELAY_MS};
use std::time::Duration;
use uuid::Uuid;

/// Filler replies used when no completion service is configured.
pub const CANNED_REPLIES: [&str; 6] = [
    "Mmm, interesting... go on 😏",
    "Oh yes, I'm listening very closely 💋",
    "Tell me more, I like where this is going 🔥",
    "You really know how to get my attention with words...",
    "That's so exciting! What happens next? 😈",
    "I love it when you talk like that...",
];

/// Produces the persona's reply to one user message. Single attempt, no retry.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn dispatch(&self, user_text: &str, character: &Character) -> ClientResult<String>;
}

/// Sends each message to a chat completion service and returns its `message`
/// field verbatim.
pub struct RemoteDispatcher {
    http: reqwest::Client,
    url: String,
}

impl RemoteDispatcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl MessageDispatcher for RemoteDispatcher {
    async fn dispatch(&self, user_text: &str, character: &Character) -> ClientResult<String> {
        tracing::debug!("Requesting reply from {} for {}", self.url, character.name);
        api::request_completion(&self.http, &self.url, user_text, character).await
    }
}

/// Waits a moment, as if typing, then picks a canned reply at random.
pub struct SimulatedDispatcher {
    delay: Duration,
}

impl Default for SimulatedDispatcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TYPING_DELAY_MS))
    }
}

impl SimulatedDispatcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MessageDispatcher for SimulatedDispatcher {
    async fn dispatch(&self, _user_text: &str, _character: &Character) -> ClientResult<String> {
        tokio::time::sleep(self.delay).await;
        let index = rand::thread_rng().gen_range(0..CANNED_REPLIES.len());
        Ok(CANNED_REPLIES[index].to_string())
    }
}

/// A dispatch owed to the session `session_id`.
///
/// Running a ticket borrows nothing from the session or controller, so the
/// caller can drive it on whatever executor it likes and hand the outcome
/// back afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchTicket {
    pub session_id: Uuid,
    pub text: String,
    pub character: Character,
}

#[derive(Debug)]
pub struct DispatchOutcome {
    pub session_id: Uuid,
    pub reply: ClientResult<String>,
}

impl DispatchTicket {
    pub async fn run(self, dispatcher: &dyn MessageDispatcher) -> DispatchOutcome {
        let reply = dispatcher.dispatch(&self.text, &self.character).await;
        if let Err(e) = &reply {
            tracing::error!("Dispatch for {} failed: {}", self.character.name, e);
        }
        DispatchOutcome {
            session_id: self.session_id,
            reply,
        }
    }
}
