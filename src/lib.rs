pub mod app;
pub mod checklist;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod prayers;
pub mod presets;
pub mod state;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use counter::{CounterState, Feedback, InvalidPresetId, NoFeedback};
pub use state::AppState;
