use crate::checklist::Checklist;
use crate::counter::CounterState;
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide state. Everything is session-scoped: nothing here survives
/// a restart, by design.
#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<Mutex<CounterState>>,
    pub checklist: Arc<Mutex<Checklist>>,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(Mutex::new(CounterState::new())),
            checklist: Arc::new(Mutex::new(Checklist::new())),
            tracker: Arc::new(Mutex::new(Tracker::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
