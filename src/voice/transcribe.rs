use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Speech-to-text capability behind voice mode. Simulated in this repo; a real
/// recognizer would plug in here.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self) -> anyhow::Result<String>;
}

/// Returns a canned transcription after a fixed listening delay.
pub struct SimulatedTranscriber {
    listen_delay: Duration,
}

impl SimulatedTranscriber {
    pub fn new(listen_delay: Duration) -> Self {
        Self { listen_delay }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl Transcriber for SimulatedTranscriber {
    async fn transcribe(&self) -> anyhow::Result<String> {
        if !self.listen_delay.is_zero() {
            sleep(self.listen_delay).await;
        }
        Ok("What is the meaning of Ayat al-Kursi?".to_string())
    }
}
