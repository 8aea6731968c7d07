//! Profile page placeholder data: stats, streaks and recent activity. These
//! numbers are presentational; real persistence is out of scope.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Question,
    Bookmark,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u8,
}

pub const USER_NAME: &str = "Muhammad Ahmed";

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Questions Asked",
        value: "147",
    },
    Stat {
        label: "Verses Studied",
        value: "89",
    },
    Stat {
        label: "Current Streak",
        value: "12",
    },
    Stat {
        label: "Knowledge Score",
        value: "85",
    },
];

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        title: "Asked about Ayat al-Kursi",
        time: "2 hours ago",
        kind: ActivityKind::Question,
    },
    Activity {
        title: "Saved Surah Al-Mulk commentary",
        time: "1 day ago",
        kind: ActivityKind::Bookmark,
    },
    Activity {
        title: "Completed daily reading goal",
        time: "2 days ago",
        kind: ActivityKind::Achievement,
    },
    Activity {
        title: "Asked about prayer times",
        time: "3 days ago",
        kind: ActivityKind::Question,
    },
];

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        title: "Surah Ar-Rahman",
        description: "Beautiful chapter about Allah's blessings",
        progress: 60,
    },
    Recommendation {
        title: "Concept of Taqwa",
        description: "Understanding God-consciousness",
        progress: 30,
    },
    Recommendation {
        title: "Stories of the Prophets",
        description: "Inspiring narratives from the Quran",
        progress: 80,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_progress_is_a_percentage() {
        assert!(RECOMMENDATIONS.iter().all(|rec| rec.progress <= 100));
    }

    #[test]
    fn activity_feed_mixes_kinds() {
        assert!(RECENT_ACTIVITY
            .iter()
            .any(|activity| activity.kind == ActivityKind::Question));
        assert!(RECENT_ACTIVITY
            .iter()
            .any(|activity| activity.kind == ActivityKind::Bookmark));
    }
}
