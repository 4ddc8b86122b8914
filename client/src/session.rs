use crate::dispatcher::DispatchTicket;
use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use shared::models::{Character, Message};
use uuid::Uuid;

/// Opening line a persona greets the user with.
pub fn opening_line(character: &Character) -> String {
    format!("Hi! I'm {}. {} 😏", character.name, character.summary())
}

/// One conversation with one persona. At most one reply may be outstanding
/// at a time; `pending` is the latch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    id: Uuid,
    character: Character,
    transcript: Vec<Message>,
    pending: bool,
}

impl ConversationSession {
    /// Opens a conversation seeded with the persona's greeting.
    pub fn start(character: Character) -> Self {
        let greeting = Message::persona(opening_line(&character));
        Self {
            id: Uuid::now_v7(),
            character,
            transcript: vec![greeting],
            pending: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's message right away and raises the latch.
    ///
    /// Blank text, or any text while a reply is outstanding, is ignored and
    /// `None` is returned. Otherwise the ticket describes the dispatch to run.
    pub fn append_user_message(&mut self, text: &str) -> Option<DispatchTicket> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if self.pending {
            tracing::debug!("Ignoring message while a reply is pending");
            return None;
        }

        self.transcript.push(Message::user(text));
        self.pending = true;
        Some(DispatchTicket {
            session_id: self.id,
            text: text.to_string(),
            character: self.character.clone(),
        })
    }

    /// Settles the outstanding dispatch and lowers the latch.
    ///
    /// A successful reply is appended as a persona message. A failed one
    /// appends nothing and hands the error back for the notification.
    pub fn resolve_pending_reply(&mut self, reply: ClientResult<String>) -> ClientResult<&Message> {
        if !self.pending {
            return Err(ClientError::NoPendingDispatch);
        }
        self.pending = false;

        let text = reply?;
        self.transcript.push(Message::persona(text));
        Ok(&self.transcript[self.transcript.len() - 1])
    }
}
