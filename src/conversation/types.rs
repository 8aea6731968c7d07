use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// A single entry in a conversation log. Immutable after creation and owned
/// exclusively by the log it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Reference to a playable recitation/audio rendering, when one exists.
    pub audio_ref: Option<String>,
    /// Ordered scholarly citations, e.g. "Surah Al-Baqarah 2:255".
    pub citation_refs: Vec<String>,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: Author::User,
            body: body.into(),
            created_at: Utc::now(),
            audio_ref: None,
            citation_refs: Vec::new(),
        }
    }

    pub fn assistant(draft: ReplyDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: Author::Assistant,
            body: draft.body,
            created_at: Utc::now(),
            audio_ref: draft.audio_ref,
            citation_refs: draft.citation_refs,
        }
    }
}

/// The payload an inference backend hands back for a pending reply. The store
/// turns it into an assistant `Message` on resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyDraft {
    pub body: String,
    pub audio_ref: Option<String>,
    pub citation_refs: Vec<String>,
}

impl ReplyDraft {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_audio(mut self, audio_ref: impl Into<String>) -> Self {
        self.audio_ref = Some(audio_ref.into());
        self
    }

    pub fn with_citations<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.citation_refs = refs.into_iter().map(Into::into).collect();
        self
    }
}
