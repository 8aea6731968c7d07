pub mod store;
pub mod types;

pub use store::{Conversation, ConversationState};
pub use types::{Author, Message, ReplyDraft};
