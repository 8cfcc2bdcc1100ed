use crate::checklist::{Checklist, Task};
use crate::counter::{CounterState, IncrementOutcome};
use crate::presets::{Locale, PRESETS, Preset};
use crate::tracker::{Metric, Tracker};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Locale,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetView {
    pub id: usize,
    pub name: String,
    pub arabic: String,
    pub transliteration: String,
    pub target: u64,
}

impl PresetView {
    pub fn new(id: usize, preset: &Preset, locale: Locale) -> Self {
        Self {
            id,
            name: preset.display_name(locale).to_string(),
            arabic: preset.arabic.to_string(),
            transliteration: preset.transliteration.to_string(),
            target: preset.target,
        }
    }
}

pub fn preset_catalog(locale: Locale) -> Vec<PresetView> {
    PRESETS
        .iter()
        .enumerate()
        .map(|(id, preset)| PresetView::new(id, preset, locale))
        .collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TasbeehResponse {
    pub count: u64,
    pub sound_enabled: bool,
    pub remaining: u64,
    pub progress: f64,
    pub milestones: Vec<u64>,
    pub preset: PresetView,
}

impl TasbeehResponse {
    pub fn from_state(state: &CounterState, locale: Locale) -> Self {
        Self {
            count: state.count(),
            sound_enabled: state.sound_enabled(),
            remaining: state.remaining(),
            progress: state.progress(),
            milestones: state.milestones_reached(),
            preset: PresetView::new(state.active_preset_id(), state.preset(), locale),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub played_sound: bool,
    pub pulsed: bool,
    pub target_reached: bool,
    #[serde(flatten)]
    pub state: TasbeehResponse,
}

impl CountResponse {
    pub fn new(outcome: IncrementOutcome, state: &CounterState, locale: Locale) -> Self {
        Self {
            played_sound: outcome.played_sound,
            pulsed: outcome.pulsed,
            target_reached: outcome.target_reached,
            state: TasbeehResponse::from_state(state, locale),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectPresetRequest {
    pub id: usize,
}

#[derive(Debug, Deserialize)]
pub struct SoundRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct PrayerView {
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub time: String,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct PrayersResponse {
    pub clock: String,
    pub date: String,
    pub current: &'static str,
    pub prayers: Vec<PrayerView>,
    pub suhoor_ends: String,
    pub iftar_begins: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskIdRequest {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub day: u32,
    pub completed: usize,
    pub total: usize,
    pub completion_percentage: f64,
    pub tasks: Vec<Task>,
}

impl ChecklistResponse {
    pub fn from_state(list: &Checklist) -> Self {
        Self {
            day: list.day(),
            completed: list.completed_count(),
            total: list.tasks().len(),
            completion_percentage: list.completion_percentage(),
            tasks: list.tasks().to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrackerUpdateRequest {
    pub metric: Metric,
    pub delta: i64,
}

#[derive(Debug, Serialize)]
pub struct TrackerResponse {
    #[serde(flatten)]
    pub counters: Tracker,
    pub quran_progress: f64,
    pub juz_progress: f64,
}

impl TrackerResponse {
    pub fn from_state(tracker: &Tracker) -> Self {
        Self {
            counters: tracker.clone(),
            quran_progress: tracker.quran_progress(),
            juz_progress: tracker.juz_progress(),
        }
    }
}
