//! Conversation core for persona chat: the character catalog, the draft
//! builder, the single live conversation, and reply dispatch against either a
//! completion service or a local simulation.

pub mod api;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod seed;
pub mod session;

pub use builder::CharacterBuilder;
pub use catalog::{CharacterCatalog, CharacterStore, HttpCharacterStore};
pub use controller::{Intent, Notice, SessionController, View};
pub use dispatcher::{
    CANNED_REPLIES, DispatchOutcome, DispatchTicket, MessageDispatcher, RemoteDispatcher,
    SimulatedDispatcher,
};
pub use error::{ClientError, ClientResult};
pub use session::{ConversationSession, opening_line};
