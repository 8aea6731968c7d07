//! Dashboard tiles: quick actions into the main modes plus the library
//! category counts.

use crate::router::PathKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub path: PathKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub count: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Voice Ask",
        description: "Speak your question naturally",
        path: PathKey::Voice,
    },
    QuickAction {
        title: "Chat Mode",
        description: "Text conversation with AI",
        path: PathKey::Chat,
    },
    QuickAction {
        title: "Read Quran",
        description: "Browse & study with tafseer",
        path: PathKey::Tafseer,
    },
];

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Quran",
        count: "114 Surahs",
    },
    Category {
        name: "Tafseer",
        count: "Multiple scholars",
    },
    Category {
        name: "Translation",
        count: "20+ languages",
    },
    Category {
        name: "Recitation",
        count: "Famous reciters",
    },
];

pub const VOICE_TIPS: [&str; 4] = [
    "Speak clearly and at a normal pace",
    "Ask about specific verses, concepts, or topics",
    "You can ask in English, Urdu, or Arabic",
    "Say \"repeat\" to hear the response again",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions_point_at_real_pages() {
        let paths: Vec<PathKey> = QUICK_ACTIONS.iter().map(|action| action.path).collect();
        assert_eq!(paths, vec![PathKey::Voice, PathKey::Chat, PathKey::Tafseer]);
    }
}
