use crate::conversation::{Message, ReplyDraft};
use async_trait::async_trait;

/// The inference collaborator behind a conversation.
///
/// This repo ships a simulated implementation only; a real backend would plug
/// in here, returning structured text plus optional audio and citation
/// references. Tests inject an immediate engine instead of a real delay.
#[async_trait]
pub trait ReplyEngine: Send + Sync {
    /// Produce exactly one reply draft for the conversation so far. The last
    /// user message in `log` is the question being answered.
    async fn generate_reply(&self, log: &[Message]) -> anyhow::Result<ReplyDraft>;
}
