pub mod characters;
pub mod chat;

pub use characters::*;
pub use chat::*;
