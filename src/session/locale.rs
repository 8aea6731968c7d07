use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Interface locale. The app ships with exactly three languages; the machine
/// code doubles as the `rust_i18n` locale key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ur,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ur, Locale::Ar];

    /// Machine code, e.g. `"ur"`. Stable; used in config files and i18n keys.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ur => "ur",
            Locale::Ar => "ar",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ur => "Urdu",
            Locale::Ar => "Arabic",
        }
    }

    /// Display name in the language itself, as shown on the selection surface.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ur => "اردو",
            Locale::Ar => "العربية",
        }
    }

    /// Parse a user-supplied locale code. Case-insensitive, whitespace-tolerant;
    /// unknown codes are an invalid-argument error.
    pub fn parse(code: &str) -> Result<Self, SessionError> {
        let normalized = code.trim().to_ascii_lowercase();
        Locale::from_str(&normalized).map_err(|_| SessionError::UnknownLocale(code.to_string()))
    }
}
