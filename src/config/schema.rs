use crate::assistant::SimulatedEngine;
use crate::error::ConfigError;
use crate::session::Locale;
use crate::voice::SimulatedTranscriber;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Locale used when onboarding is skipped via the quick path.
    #[serde(default)]
    pub default_locale: Locale,

    #[serde(default)]
    pub reply: ReplyConfig,

    #[serde(default)]
    pub voice: VoiceConfig,
}

/// Timing of the simulated inference backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Base "thinking" delay before the assistant reply lands.
    #[serde(default = "default_reply_delay_ms")]
    pub base_delay_ms: u64,

    /// Upper bound of the random jitter added to the base delay.
    #[serde(default = "default_reply_jitter_ms")]
    pub jitter_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// How long the simulated recognizer "listens" before transcribing.
    #[serde(default = "default_listen_delay_ms")]
    pub listen_delay_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    2000
}

fn default_reply_jitter_ms() -> u64 {
    250
}

fn default_listen_delay_ms() -> u64 {
    3000
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_reply_delay_ms(),
            jitter_ms: default_reply_jitter_ms(),
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            listen_delay_ms: default_listen_delay_ms(),
        }
    }
}

impl Config {
    /// Load `~/.iqra/config.toml`, creating it with defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let iqra_dir = home.join(".iqra");
        let config_path = iqra_dir.join("config.toml");

        if config_path.exists() {
            return Self::from_path(&config_path);
        }

        fs::create_dir_all(&iqra_dir).context("Failed to create config directory")?;
        let config = Self {
            config_path,
            default_locale: Locale::default(),
            reply: ReplyConfig::default(),
            voice: VoiceConfig::default(),
        };
        config.save()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Self = toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    /// Delays are UI pacing, not real work; cap them so a typo in the config
    /// cannot freeze the app.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.reply.base_delay_ms > 60_000 {
            return Err(ConfigError::Validation(format!(
                "reply.base_delay_ms too large: {}",
                self.reply.base_delay_ms
            )));
        }
        if self.reply.jitter_ms > 5_000 {
            return Err(ConfigError::Validation(format!(
                "reply.jitter_ms too large: {}",
                self.reply.jitter_ms
            )));
        }
        if self.voice.listen_delay_ms > 60_000 {
            return Err(ConfigError::Validation(format!(
                "voice.listen_delay_ms too large: {}",
                self.voice.listen_delay_ms
            )));
        }
        Ok(())
    }

    pub fn reply_engine(&self) -> SimulatedEngine {
        SimulatedEngine::new(
            Duration::from_millis(self.reply.base_delay_ms),
            self.reply.jitter_ms,
        )
    }

    pub fn transcriber(&self) -> SimulatedTranscriber {
        SimulatedTranscriber::new(Duration::from_millis(self.voice.listen_delay_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            default_locale: Locale::default(),
            reply: ReplyConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_page_timings() {
        let config = Config::default();
        assert_eq!(config.reply.base_delay_ms, 2000);
        assert_eq!(config.voice.listen_delay_ms, 3000);
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            default_locale: Locale::Ur,
            ..Config::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.default_locale, Locale::Ur);
        assert_eq!(parsed.reply.base_delay_ms, config.reply.base_delay_ms);
    }

    #[test]
    fn minimal_file_fills_defaults() {
        let parsed: Config = toml::from_str("default_locale = \"ar\"").unwrap();
        assert_eq!(parsed.default_locale, Locale::Ar);
        assert_eq!(parsed.reply.jitter_ms, 250);
    }

    #[test]
    fn validate_rejects_oversized_delays() {
        let mut config = Config::default();
        config.reply.base_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_path_loads_and_pins_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_locale = \"ur\"\n").unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.default_locale, Locale::Ur);
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn from_path_rejects_invalid_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[reply]\nbase_delay_ms = 999999\n").unwrap();

        assert!(Config::from_path(&path).is_err());
    }
}
