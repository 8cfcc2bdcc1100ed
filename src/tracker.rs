use serde::{Deserialize, Serialize};

pub const QURAN_PAGES: u64 = 604;
pub const QURAN_JUZ: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    QuranPages,
    QuranJuz,
    PrayersMissed,
    TaraweehRakats,
    TahajjudRakats,
    Sadaqah,
    Dhikr,
    Dua,
}

/// Per-Ramadan worship counters. Every counter is non-negative; decrements
/// clamp at zero instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tracker {
    pub quran_pages: u64,
    pub quran_juz: u64,
    pub prayers_missed: u64,
    pub taraweeh_rakats: u64,
    pub tahajjud_rakats: u64,
    pub sadaqah: u64,
    pub dhikr: u64,
    pub dua: u64,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a signed delta to one counter, clamping at zero.
    pub fn update(&mut self, metric: Metric, delta: i64) -> u64 {
        let slot = self.slot(metric);
        *slot = if delta < 0 {
            slot.saturating_sub(delta.unsigned_abs())
        } else {
            slot.saturating_add(delta as u64)
        };
        *slot
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pages read as a percentage of the whole Quran, clamped for display.
    pub fn quran_progress(&self) -> f64 {
        (self.quran_pages as f64 / QURAN_PAGES as f64 * 100.0).min(100.0)
    }

    pub fn juz_progress(&self) -> f64 {
        (self.quran_juz as f64 / QURAN_JUZ as f64 * 100.0).min(100.0)
    }

    fn slot(&mut self, metric: Metric) -> &mut u64 {
        match metric {
            Metric::QuranPages => &mut self.quran_pages,
            Metric::QuranJuz => &mut self.quran_juz,
            Metric::PrayersMissed => &mut self.prayers_missed,
            Metric::TaraweehRakats => &mut self.taraweeh_rakats,
            Metric::TahajjudRakats => &mut self.tahajjud_rakats,
            Metric::Sadaqah => &mut self.sadaqah,
            Metric::Dhikr => &mut self.dhikr,
            Metric::Dua => &mut self.dua,
        }
    }
}
