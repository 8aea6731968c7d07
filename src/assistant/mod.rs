pub mod simulated;
pub mod traits;

pub use simulated::SimulatedEngine;
pub use traits::ReplyEngine;

use crate::conversation::{Conversation, Message};
use crate::error::{IqraError, Result};

/// One full chat turn: submit the user message, wait for the engine, resolve
/// the pending reply.
///
/// If the engine fails the pending flag is abandoned rather than left wedged,
/// so the conversation stays usable and the error surfaces to the caller.
pub async fn run_turn<'a>(
    conversation: &'a mut Conversation,
    engine: &dyn ReplyEngine,
    body: &str,
) -> Result<&'a Message> {
    conversation.submit_user_message(body)?;

    let draft = match engine.generate_reply(conversation.log()).await {
        Ok(draft) => draft,
        Err(error) => {
            conversation.abandon_pending();
            return Err(IqraError::Other(error));
        }
    };

    Ok(conversation.resolve_pending_reply(draft)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Author, ReplyDraft};
    use async_trait::async_trait;

    struct FailingEngine;

    #[async_trait]
    impl ReplyEngine for FailingEngine {
        async fn generate_reply(&self, _log: &[Message]) -> anyhow::Result<ReplyDraft> {
            anyhow::bail!("backend unavailable")
        }
    }

    #[tokio::test]
    async fn run_turn_appends_question_and_answer() {
        let mut conversation = Conversation::new();
        let engine = SimulatedEngine::instant();

        let reply = run_turn(&mut conversation, &engine, "What is Ayat al-Kursi?")
            .await
            .unwrap();
        assert_eq!(reply.author, Author::Assistant);
        assert_eq!(conversation.log().len(), 2);
        assert!(!conversation.is_pending());
    }

    #[tokio::test]
    async fn run_turn_engine_failure_clears_pending_flag() {
        let mut conversation = Conversation::new();

        let err = run_turn(&mut conversation, &FailingEngine, "question")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("backend unavailable"));
        assert!(!conversation.is_pending());
        assert_eq!(conversation.log().len(), 1);
    }

    #[tokio::test]
    async fn run_turn_rejects_empty_body() {
        let mut conversation = Conversation::new();
        let engine = SimulatedEngine::instant();

        let err = run_turn(&mut conversation, &engine, "  ").await.unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert!(conversation.log().is_empty());
    }
}
