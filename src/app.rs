use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/tasbeeh", get(handlers::tasbeeh_page))
        .route("/prayers", get(handlers::prayers_page))
        .route("/checklist", get(handlers::checklist_page))
        .route("/tracker", get(handlers::tracker_page))
        .route("/education", get(handlers::education_page))
        .route("/count/tap", post(handlers::count_tap))
        .route("/count/reset", post(handlers::count_reset))
        .route("/api/tasbeeh", get(handlers::get_tasbeeh))
        .route("/api/tasbeeh/count", post(handlers::tasbeeh_count))
        .route("/api/tasbeeh/reset", post(handlers::tasbeeh_reset))
        .route("/api/tasbeeh/preset", post(handlers::tasbeeh_preset))
        .route("/api/tasbeeh/sound", post(handlers::tasbeeh_sound))
        .route("/api/presets", get(handlers::get_presets))
        .route("/api/prayers", get(handlers::get_prayers))
        .route("/api/checklist", get(handlers::get_checklist))
        .route("/api/checklist/toggle", post(handlers::checklist_toggle))
        .route("/api/checklist/add", post(handlers::checklist_add))
        .route("/api/checklist/delete", post(handlers::checklist_delete))
        .route("/api/checklist/new-day", post(handlers::checklist_new_day))
        .route("/api/checklist/restore", post(handlers::checklist_restore))
        .route("/api/tracker", get(handlers::get_tracker))
        .route("/api/tracker/update", post(handlers::tracker_update))
        .route("/api/tracker/reset", post(handlers::tracker_reset))
        .with_state(state)
}
