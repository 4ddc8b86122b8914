use crate::builder::CharacterBuilder;
use crate::catalog::CharacterCatalog;
use crate::config::{catalog_for, dispatcher_for};
use crate::dispatcher::{DispatchOutcome, DispatchTicket, MessageDispatcher};
use crate::session::ConversationSession;
use serde::{Deserialize, Serialize};
use shared::models::{Character, CharacterField, ClientSettings};
use std::sync::Arc;
use uuid::Uuid;

/// What the presentation layer should be showing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum View {
    Catalog,
    Builder,
    Conversation(ConversationSession),
}

/// Transient, dismissible message for the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
}

/// User intents that complete synchronously.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SelectCharacter(Uuid),
    NewCharacter,
    EditField { field: CharacterField, value: String },
    /// Returns to the catalog, discarding any conversation.
    Back,
    DismissNotice,
}

pub struct SessionController {
    catalog: CharacterCatalog,
    builder: CharacterBuilder,
    view: View,
    dispatcher: Arc<dyn MessageDispatcher>,
    notice: Option<Notice>,
}

impl SessionController {
    pub fn new(catalog: CharacterCatalog, dispatcher: Arc<dyn MessageDispatcher>) -> Self {
        Self {
            catalog,
            builder: CharacterBuilder::new(),
            view: View::Catalog,
            dispatcher,
            notice: None,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(catalog_for(settings), dispatcher_for(settings))
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn catalog(&self) -> &CharacterCatalog {
        &self.catalog
    }

    pub fn builder(&self) -> &CharacterBuilder {
        &self.builder
    }

    pub fn session(&self) -> Option<&ConversationSession> {
        match &self.view {
            View::Conversation(session) => Some(session),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dispatcher(&self) -> Arc<dyn MessageDispatcher> {
        self.dispatcher.clone()
    }

    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::SelectCharacter(id) => {
                if self.view != View::Catalog {
                    tracing::debug!("Ignoring character selection outside the catalog");
                    return;
                }
                match self.catalog.get(id) {
                    Some(character) => {
                        tracing::info!("Starting conversation with {}", character.name);
                        self.view = View::Conversation(ConversationSession::start(character.clone()));
                    }
                    None => tracing::debug!("Ignoring selection of unknown character {}", id),
                }
            }
            Intent::NewCharacter => {
                self.view = View::Builder;
            }
            Intent::EditField { field, value } => {
                if self.view == View::Builder {
                    self.builder.update_field(field, value);
                }
            }
            Intent::Back => {
                self.view = View::Catalog;
            }
            Intent::DismissNotice => {
                self.notice = None;
            }
        }
    }

    pub async fn load_catalog(&mut self) -> &[Character] {
        self.catalog.load().await
    }

    /// Commits the builder draft. On success the catalog view is shown again;
    /// a store failure leaves the form in place and raises a notice.
    pub async fn commit_character(&mut self) -> Option<Character> {
        if self.view != View::Builder {
            return None;
        }
        match self.builder.commit(&mut self.catalog).await {
            Ok(Some(character)) => {
                self.view = View::Catalog;
                Some(character)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to save character: {}", e);
                self.notify(format!("Couldn't save the character: {}", e));
                None
            }
        }
    }

    /// Shows the user's message immediately and returns the dispatch to run,
    /// or `None` if the message was rejected.
    pub fn send_message(&mut self, text: &str) -> Option<DispatchTicket> {
        match &mut self.view {
            View::Conversation(session) => session.append_user_message(text),
            _ => None,
        }
    }

    /// Applies a settled dispatch to the live conversation. Outcomes for a
    /// conversation that has since been left are dropped.
    pub fn resolve_reply(&mut self, outcome: DispatchOutcome) {
        let session = match &mut self.view {
            View::Conversation(session) if session.id() == outcome.session_id => session,
            _ => {
                tracing::debug!("Dropping reply for closed conversation {}", outcome.session_id);
                return;
            }
        };
        if let Err(e) = session.resolve_pending_reply(outcome.reply).map(|_| ()) {
            self.notify(format!("Couldn't get a reply: {}", e));
        }
    }

    /// Sends a message and waits for the reply in one go.
    pub async fn submit(&mut self, text: &str) {
        let Some(ticket) = self.send_message(text) else {
            return;
        };
        let dispatcher = self.dispatcher.clone();
        let outcome = ticket.run(dispatcher.as_ref()).await;
        self.resolve_reply(outcome);
    }

    fn notify(&mut self, text: String) {
        self.notice = Some(Notice { text });
    }
}
