use super::traits::ReplyEngine;
use crate::conversation::{Author, Message, ReplyDraft};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Stand-in for a real inference backend: waits a fixed base delay plus a
/// small random jitter, then answers from a canned tafseer repertoire keyed on
/// the question text.
pub struct SimulatedEngine {
    base_delay: Duration,
    jitter_ms: u64,
}

impl SimulatedEngine {
    pub fn new(base_delay: Duration, jitter_ms: u64) -> Self {
        Self {
            base_delay,
            jitter_ms,
        }
    }

    /// Zero-delay engine for tests and scripted runs.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, 0)
    }

    fn draft_for(question: &str) -> ReplyDraft {
        let normalized = question.to_lowercase();

        if normalized.contains("kursi") || normalized.contains("2:255") {
            return ReplyDraft::text(
                "This verse from Surah Al-Baqarah (2:255) is known as Ayat al-Kursi, one of \
                 the most powerful verses in the Quran. It speaks about Allah's supreme \
                 authority and knowledge. The verse emphasizes that Allah's knowledge \
                 encompasses all things, and His throne extends over the heavens and the earth.",
            )
            .with_audio("#")
            .with_citations(["Surah Al-Baqarah 2:255", "Tafseer Ibn Kathir"]);
        }

        if normalized.contains("fatihah") || normalized.contains("bismillah") {
            return ReplyDraft::text(
                "Surah Al-Fatihah, \"The Opening\", is the first chapter of the Quran and is \
                 recited in every unit of prayer. Its seven verses praise Allah as the Most \
                 Gracious and Most Merciful and ask for guidance along the straight path.",
            )
            .with_audio("#")
            .with_citations(["Surah Al-Fatihah 1:1-7"]);
        }

        ReplyDraft::text(
            "That is a beautiful question. The Quran addresses this across several passages; \
             a good place to begin is reading the relevant verses together with a classical \
             commentary, then reflecting on how the guidance applies to daily life.",
        )
        .with_citations(["Tafseer Ibn Kathir"])
    }
}

#[async_trait]
impl ReplyEngine for SimulatedEngine {
    async fn generate_reply(&self, log: &[Message]) -> anyhow::Result<ReplyDraft> {
        let question = log
            .iter()
            .rev()
            .find(|message| message.author == Author::User)
            .map(|message| message.body.as_str())
            .unwrap_or_default();

        let jitter = if self.jitter_ms > 0 {
            rand::rng().random_range(0..=self.jitter_ms)
        } else {
            0
        };
        let delay = self.base_delay + Duration::from_millis(jitter);
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "simulating inference");
            sleep(delay).await;
        }

        Ok(Self::draft_for(question))
    }
}
