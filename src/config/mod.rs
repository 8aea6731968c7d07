pub mod schema;

pub use schema::{Config, ReplyConfig, VoiceConfig};
