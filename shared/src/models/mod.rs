pub mod character;
pub mod chat;
pub mod message;
pub mod settings;

pub use character::*;
pub use chat::*;
pub use message::*;
pub use settings::*;
