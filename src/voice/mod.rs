pub mod transcribe;

pub use transcribe::{SimulatedTranscriber, Transcriber};

use tracing::debug;

/// Voice capture lifecycle: `Idle -> Listening -> Idle`. Stopping mid-listen
/// discards whatever was captured; only a finished listen yields a
/// transcription, which the caller then submits through the conversation
/// engine like any typed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Listening,
}

#[derive(Debug, Clone)]
pub struct VoiceSession {
    state: VoiceState,
    transcription: Option<String>,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self {
            state: VoiceState::Idle,
            transcription: None,
        }
    }

    /// Begin a capture. Clears any previous transcription so the page shows a
    /// fresh round.
    pub fn start_listening(&mut self) {
        self.transcription = None;
        self.state = VoiceState::Listening;
        debug!("voice capture started");
    }

    /// Abort the capture, discarding any partial result.
    pub fn stop_listening(&mut self) {
        self.transcription = None;
        self.state = VoiceState::Idle;
        debug!("voice capture stopped");
    }

    fn finish_listening(&mut self, transcription: String) {
        self.transcription = Some(transcription);
        self.state = VoiceState::Idle;
    }

    /// Run one full capture round against the given transcriber. On failure
    /// the session returns to idle with nothing captured.
    pub async fn listen(&mut self, transcriber: &dyn Transcriber) -> anyhow::Result<&str> {
        self.start_listening();
        match transcriber.transcribe().await {
            Ok(transcription) => {
                self.finish_listening(transcription);
                Ok(self.transcription.as_deref().expect("just finished"))
            }
            Err(error) => {
                self.stop_listening();
                Err(error)
            }
        }
    }

    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref()
    }

    pub fn is_listening(&self) -> bool {
        self.state == VoiceState::Listening
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingTranscriber;

    #[async_trait]
    impl Transcriber for FailingTranscriber {
        async fn transcribe(&self) -> anyhow::Result<String> {
            anyhow::bail!("microphone unavailable")
        }
    }

    #[tokio::test]
    async fn listen_captures_transcription_and_returns_to_idle() {
        let mut session = VoiceSession::new();
        let transcriber = SimulatedTranscriber::instant();

        let text = session.listen(&transcriber).await.unwrap().to_string();

        assert!(text.contains("Ayat al-Kursi"));
        assert_eq!(session.state(), VoiceState::Idle);
        assert_eq!(session.transcription(), Some(text.as_str()));
    }

    #[test]
    fn stop_mid_listen_discards_transcription() {
        let mut session = VoiceSession::new();
        session.start_listening();
        assert!(session.is_listening());

        session.stop_listening();
        assert!(!session.is_listening());
        assert_eq!(session.transcription(), None);
    }

    #[test]
    fn restart_clears_previous_round() {
        let mut session = VoiceSession::new();
        session.finish_listening("earlier question".into());
        assert!(session.transcription().is_some());

        session.start_listening();
        assert_eq!(session.transcription(), None);
    }

    #[tokio::test]
    async fn transcriber_failure_leaves_session_idle_and_empty() {
        let mut session = VoiceSession::new();

        let err = session.listen(&FailingTranscriber).await.unwrap_err();
        assert!(err.to_string().contains("microphone"));
        assert!(!session.is_listening());
        assert_eq!(session.transcription(), None);
    }
}
