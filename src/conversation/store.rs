use super::types::{Author, Message, ReplyDraft};
use crate::error::ConversationError;
use tracing::debug;

/// Conversation lifecycle: `Idle -> AwaitingReply -> Idle`, open-ended, no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReply,
}

/// Ordered, append-only log of exchanged messages plus the pending-reply flag.
///
/// Insertion order is display order is chronological order; messages are never
/// reordered or edited in place. At most one reply is outstanding at a time:
/// submissions while a reply is pending are rejected rather than queued (the
/// UI disables the input, the store enforces it).
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    state: ConversationState,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: ConversationState::Idle,
        }
    }

    /// A chat conversation opens with the assistant greeting, localized for
    /// the active locale.
    pub fn with_greeting() -> Self {
        let mut conversation = Self::new();
        conversation
            .messages
            .push(Message::assistant(ReplyDraft::text(
                t!("chat.greeting").to_string(),
            )));
        conversation
    }

    /// Append a user message and mark a reply as pending.
    ///
    /// Empty or whitespace-only bodies and submissions while a reply is
    /// already outstanding both fail without touching the log.
    pub fn submit_user_message(&mut self, body: &str) -> Result<&Message, ConversationError> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(ConversationError::EmptySubmission);
        }
        if self.state == ConversationState::AwaitingReply {
            return Err(ConversationError::ReplyAlreadyPending);
        }

        self.messages.push(Message::user(trimmed));
        self.state = ConversationState::AwaitingReply;
        debug!(messages = self.messages.len(), "user message submitted");
        Ok(self.messages.last().expect("just pushed"))
    }

    /// Append the assistant reply for the outstanding submission and return to
    /// `Idle`. Fails with `NoPendingReply` when nothing is outstanding.
    pub fn resolve_pending_reply(
        &mut self,
        draft: ReplyDraft,
    ) -> Result<&Message, ConversationError> {
        if self.state != ConversationState::AwaitingReply {
            return Err(ConversationError::NoPendingReply);
        }

        self.messages.push(Message::assistant(draft));
        self.state = ConversationState::Idle;
        debug!(messages = self.messages.len(), "pending reply resolved");
        Ok(self.messages.last().expect("just pushed"))
    }

    /// Drop the pending-reply flag without appending anything. Used when the
    /// backend fails or the user navigates away mid-delay, so a stale reply
    /// can never land in the log afterwards.
    pub fn abandon_pending(&mut self) {
        if self.state == ConversationState::AwaitingReply {
            self.state = ConversationState::Idle;
            debug!("pending reply abandoned");
        }
    }

    /// Read-only snapshot of the log. Repeated calls without mutation return
    /// the identical sequence.
    pub fn log(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.state == ConversationState::AwaitingReply
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Last user message, if any; the question the pending reply answers.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.author == Author::User)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
