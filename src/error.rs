use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `iqra`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum IqraError {
    // ── Session / Onboarding ─────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Conversation ─────────────────────────────────────────────────────
    #[error("conversation: {0}")]
    Conversation(#[from] ConversationError),

    // ── Routing ──────────────────────────────────────────────────────────
    #[error("route: {0}")]
    Route(#[from] RouteError),

    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ───────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Session errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown locale: {0:?} (expected one of: en, ur, ar)")]
    UnknownLocale(String),
}

// ─── Conversation errors ─────────────────────────────────────────────────────

/// Local validation errors returned to the caller; never fatal. The UI layer
/// uses them to disable or re-enable the affected controls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("message body is empty or whitespace-only")]
    EmptySubmission,

    #[error("a reply is already pending for this conversation")]
    ReplyAlreadyPending,

    #[error("no reply is pending for this conversation")]
    NoPendingReply,
}

// ─── Routing errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown page: {0:?}")]
    NotFound(String),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ──────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, IqraError>;
