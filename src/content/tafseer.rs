//! Surah index and verse data for the tafseer browser. Placeholder data until
//! a Quran API is wired in; the lookup surface is what the pages depend on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub number: u16,
    pub name: &'static str,
    pub arabic: &'static str,
    pub verses: u16,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse {
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub reference: &'static str,
}

pub const SURAHS: [Surah; 5] = [
    Surah {
        number: 1,
        name: "Al-Fatihah",
        arabic: "الفاتحة",
        verses: 7,
        meaning: "The Opening",
    },
    Surah {
        number: 2,
        name: "Al-Baqarah",
        arabic: "البقرة",
        verses: 286,
        meaning: "The Cow",
    },
    Surah {
        number: 3,
        name: "Ali 'Imran",
        arabic: "آل عمران",
        verses: 200,
        meaning: "Family of Imran",
    },
    Surah {
        number: 4,
        name: "An-Nisa",
        arabic: "النساء",
        verses: 176,
        meaning: "The Women",
    },
    Surah {
        number: 5,
        name: "Al-Ma'idah",
        arabic: "المائدة",
        verses: 120,
        meaning: "The Table",
    },
];

pub fn featured_verse() -> Verse {
    Verse {
        arabic: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
        transliteration: "Bismillahi Ar-Rahman Ar-Raheem",
        translation: "In the name of Allah, the Most Gracious, the Most Merciful",
        reference: "Al-Fatihah 1:1",
    }
}

pub fn surah(number: u16) -> Option<&'static Surah> {
    SURAHS.iter().find(|surah| surah.number == number)
}

/// Case-insensitive substring search over name and meaning.
pub fn search_surahs(query: &str) -> Vec<&'static Surah> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SURAHS.iter().collect();
    }
    SURAHS
        .iter()
        .filter(|surah| {
            surah.name.to_lowercase().contains(&needle)
                || surah.meaning.to_lowercase().contains(&needle)
        })
        .collect()
}
