use crate::presets::{PRESETS, Preset};

/// Display thresholds shown under the counter. Purely a projection of the
/// count; reaching one changes no state.
pub const MILESTONES: &[u64] = &[33, 66, 99, 100, 200, 300, 500, 1000];

/// A preset index outside the catalog. The catalog is closed and finite, so
/// this is a caller bug, never a user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPresetId(pub usize);

impl std::fmt::Display for InvalidPresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "preset id {} is out of range (0..{})", self.0, PRESETS.len())
    }
}

impl std::error::Error for InvalidPresetId {}

/// Platform feedback capability. Both effects are fire-and-forget: they must
/// not block, and a platform without the capability implements them as no-ops.
pub trait Feedback {
    /// Short audio cue on each counted tap.
    fn click(&mut self);
    /// Short haptic pulse on milestone counts.
    fn pulse(&mut self);
}

/// A platform with neither speaker nor vibration motor. The server itself
/// uses this; the browser performs the real effects from the outcome flags.
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn click(&mut self) {}
    fn pulse(&mut self) {}
}

/// What a single increment did, beyond bumping the count. The HTTP layer
/// forwards these flags so the client can play the cue, vibrate, and show
/// the completion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementOutcome {
    pub count: u64,
    pub played_sound: bool,
    pub pulsed: bool,
    /// True only on the increment that makes the count equal the active
    /// preset's target; never again while counting past it.
    pub target_reached: bool,
}

/// The tasbeeh counter. Owns its entire mutable state; nothing else may
/// touch the count, the active preset, or the sound flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    active_preset: usize,
    count: u64,
    sound_enabled: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            active_preset: 0,
            count: 0,
            sound_enabled: true,
        }
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn active_preset_id(&self) -> usize {
        self.active_preset
    }

    pub fn preset(&self) -> &'static Preset {
        &PRESETS[self.active_preset]
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Count one repetition. The count update always happens first; feedback
    /// effects come after and can never fail or undo it.
    pub fn increment(&mut self, feedback: &mut dyn Feedback) -> IncrementOutcome {
        self.count += 1;
        let target = self.preset().target;

        let played_sound = self.sound_enabled;
        if played_sound {
            feedback.click();
        }

        // One pulse even when the count is both a multiple of 33 and the
        // target (e.g. 33 with a target of 33).
        let pulsed = self.count % 33 == 0 || self.count == target;
        if pulsed {
            feedback.pulse();
        }

        IncrementOutcome {
            count: self.count,
            played_sound,
            pulsed,
            target_reached: self.count == target,
        }
    }

    /// Count one repetition and, on the target crossing, consume the user's
    /// decision: `true` keeps counting, `false` resets to zero.
    pub fn increment_prompting(
        &mut self,
        feedback: &mut dyn Feedback,
        prompt: impl FnOnce() -> bool,
    ) -> IncrementOutcome {
        let outcome = self.increment(feedback);
        if outcome.target_reached && !prompt() {
            self.reset();
        }
        outcome
    }

    /// Back to zero. Preset and sound flag are untouched.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Switch dhikr. Always discards the in-progress tally so a stale count
    /// is never read against the new target.
    pub fn select_preset(&mut self, id: usize) -> Result<(), InvalidPresetId> {
        if id >= PRESETS.len() {
            return Err(InvalidPresetId(id));
        }
        self.active_preset = id;
        self.count = 0;
        Ok(())
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn remaining(&self) -> u64 {
        self.preset().target.saturating_sub(self.count)
    }

    /// Fraction of the target reached, clamped to [0, 1] for display. The
    /// stored count itself is not clamped and may run past the target.
    pub fn progress(&self) -> f64 {
        let ratio = self.count as f64 / self.preset().target as f64;
        ratio.min(1.0)
    }

    /// Which display milestones the current count has reached.
    pub fn milestones_reached(&self) -> Vec<u64> {
        MILESTONES
            .iter()
            .copied()
            .filter(|&milestone| self.count >= milestone)
            .collect()
    }
}
