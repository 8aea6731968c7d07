use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Opaque identifier selecting which page view is active. The set is fixed;
/// there are no deep-linking parameters beyond the key itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PathKey {
    Home,
    Chat,
    Voice,
    Tafseer,
    Profile,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub key: PathKey,
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Fixed navigation menu, in display order.
pub const PAGES: [PageDescriptor; 6] = [
    PageDescriptor {
        key: PathKey::Home,
        title: "Iqra AI",
        tagline: "How can I help you understand the Quran today?",
    },
    PageDescriptor {
        key: PathKey::Chat,
        title: "Chat with Iqra AI",
        tagline: "Ask anything about the Quran and receive detailed explanations",
    },
    PageDescriptor {
        key: PathKey::Voice,
        title: "Voice Mode",
        tagline: "Speak naturally and get detailed explanations",
    },
    PageDescriptor {
        key: PathKey::Tafseer,
        title: "Tafseer & Study",
        tagline: "Deep understanding of Quranic verses with scholarly commentary",
    },
    PageDescriptor {
        key: PathKey::Profile,
        title: "Profile",
        tagline: "Your study journey at a glance",
    },
    PageDescriptor {
        key: PathKey::Premium,
        title: "Unlock Premium Features",
        tagline: "Unlock the full potential of AI-powered Quran study",
    },
];

/// Total function over the known keys.
pub fn descriptor(key: PathKey) -> PageDescriptor {
    PAGES
        .iter()
        .copied()
        .find(|page| page.key == key)
        .expect("every PathKey has a descriptor")
}

/// Resolve a raw path to a page. Leading slashes are tolerated and the empty
/// path means home, matching the original `/` route. Unknown keys yield
/// `RouteError::NotFound`; the caller decides the fallback.
pub fn resolve(raw: &str) -> Result<PageDescriptor, RouteError> {
    let cleaned = raw.trim().trim_start_matches('/').to_ascii_lowercase();
    if cleaned.is_empty() {
        return Ok(descriptor(PathKey::Home));
    }

    PathKey::from_str(&cleaned)
        .map(descriptor)
        .map_err(|_| RouteError::NotFound(raw.to_string()))
}

/// Home-redirect fallback for unknown keys.
pub fn resolve_or_home(raw: &str) -> PageDescriptor {
    resolve(raw).unwrap_or_else(|_| descriptor(PathKey::Home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_known_key() {
        for page in PAGES {
            let resolved = resolve(page.key.to_string().as_str()).unwrap();
            assert_eq!(resolved.key, page.key);
        }
    }

    #[test]
    fn resolves_slash_prefixed_paths() {
        assert_eq!(resolve("/chat").unwrap().key, PathKey::Chat);
        assert_eq!(resolve("/").unwrap().key, PathKey::Home);
        assert_eq!(resolve("").unwrap().key, PathKey::Home);
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve("Tafseer").unwrap().key, PathKey::Tafseer);
    }

    #[test]
    fn unknown_key_yields_not_found() {
        let err = resolve("/settings").unwrap_err();
        assert_eq!(err, RouteError::NotFound("/settings".into()));
    }

    #[test]
    fn resolve_or_home_falls_back_to_home() {
        assert_eq!(resolve_or_home("nonsense").key, PathKey::Home);
        assert_eq!(resolve_or_home("premium").key, PathKey::Premium);
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(resolve("voice").unwrap(), resolve("voice").unwrap());
    }
}
