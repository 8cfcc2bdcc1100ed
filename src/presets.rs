use serde::{Deserialize, Serialize};

/// Display language selected by the client. English is the fallback for
/// anything that has no translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
    Ur,
}

impl Locale {
    /// Arabic and Urdu render right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar | Locale::Ur)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

/// A dhikr phrase with its conventional repetition target. The catalog is
/// fixed; presets are never created or removed at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub name_ar: &'static str,
    pub name_ur: &'static str,
    /// The phrase in Arabic script; empty for the free-count preset.
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub target: u64,
}

impl Preset {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name,
            Locale::Ar => self.name_ar,
            Locale::Ur => self.name_ur,
        }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "SubhanAllah",
        name_ar: "سبحان الله",
        name_ur: "سبحان اللہ",
        arabic: "سُبْحَانَ اللَّهِ",
        transliteration: "SubhanAllah",
        target: 33,
    },
    Preset {
        name: "Alhamdulillah",
        name_ar: "الحمد لله",
        name_ur: "الحمد للہ",
        arabic: "الْحَمْدُ لِلَّهِ",
        transliteration: "Alhamdulillah",
        target: 33,
    },
    Preset {
        name: "Allahu Akbar",
        name_ar: "الله أكبر",
        name_ur: "اللہ اکبر",
        arabic: "اللَّهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        target: 34,
    },
    Preset {
        name: "La ilaha illallah",
        name_ar: "لا إله إلا الله",
        name_ur: "لا الہ الا اللہ",
        arabic: "لَا إِلَٰهَ إِلَّا اللَّهُ",
        transliteration: "La ilaha illallah",
        target: 100,
    },
    Preset {
        name: "Astaghfirullah",
        name_ar: "أستغفر الله",
        name_ur: "استغفر اللہ",
        arabic: "أَسْتَغْفِرُ اللَّهَ",
        transliteration: "Astaghfirullah",
        target: 100,
    },
    Preset {
        name: "Custom",
        name_ar: "مخصص",
        name_ur: "اپنی مرضی",
        arabic: "",
        transliteration: "Custom Count",
        target: 100,
    },
];
