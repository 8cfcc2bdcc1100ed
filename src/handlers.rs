use crate::counter::NoFeedback;
use crate::errors::AppError;
use crate::models::{
    AddTaskRequest, ChecklistResponse, CountResponse, LangQuery, PrayerView, PrayersResponse,
    PresetView, SelectPresetRequest, SoundRequest, TasbeehResponse, TaskIdRequest,
    TrackerResponse, TrackerUpdateRequest, preset_catalog,
};
use crate::prayers::{TIMETABLE, current_prayer, iftar_begins, suhoor_ends};
use crate::state::AppState;
use crate::ui::{
    render_checklist, render_education, render_home, render_prayers, render_tasbeeh,
    render_tracker,
};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Local;

pub async fn home(Query(query): Query<LangQuery>) -> Html<String> {
    Html(render_home(query.lang))
}

pub async fn tasbeeh_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Html<String> {
    let counter = state.counter.lock().await;
    Html(render_tasbeeh(&counter, query.lang))
}

pub async fn education_page(Query(query): Query<LangQuery>) -> Html<String> {
    Html(render_education(query.lang))
}

pub async fn prayers_page(Query(query): Query<LangQuery>) -> Html<String> {
    Html(render_prayers(&prayers_now(), query.lang))
}

pub async fn checklist_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Html<String> {
    let list = state.checklist.lock().await;
    Html(render_checklist(&list, query.lang))
}

pub async fn tracker_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_tracker(&tracker, query.lang))
}

// No-JS fallbacks, form posts that bounce back to the page.

pub async fn count_tap(State(state): State<AppState>) -> Redirect {
    let mut counter = state.counter.lock().await;
    counter.increment(&mut NoFeedback);
    Redirect::to("/tasbeeh")
}

pub async fn count_reset(State(state): State<AppState>) -> Redirect {
    let mut counter = state.counter.lock().await;
    counter.reset();
    Redirect::to("/tasbeeh")
}

pub async fn get_tasbeeh(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<TasbeehResponse> {
    let counter = state.counter.lock().await;
    Json(TasbeehResponse::from_state(&counter, query.lang))
}

pub async fn tasbeeh_count(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<CountResponse> {
    let mut counter = state.counter.lock().await;
    let outcome = counter.increment(&mut NoFeedback);
    Json(CountResponse::new(outcome, &counter, query.lang))
}

pub async fn tasbeeh_reset(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<TasbeehResponse> {
    let mut counter = state.counter.lock().await;
    counter.reset();
    Json(TasbeehResponse::from_state(&counter, query.lang))
}

pub async fn tasbeeh_preset(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(payload): Json<SelectPresetRequest>,
) -> Result<Json<TasbeehResponse>, AppError> {
    let mut counter = state.counter.lock().await;
    counter.select_preset(payload.id)?;
    Ok(Json(TasbeehResponse::from_state(&counter, query.lang)))
}

pub async fn tasbeeh_sound(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(payload): Json<SoundRequest>,
) -> Json<TasbeehResponse> {
    let mut counter = state.counter.lock().await;
    counter.set_sound_enabled(payload.enabled);
    Json(TasbeehResponse::from_state(&counter, query.lang))
}

pub async fn get_presets(Query(query): Query<LangQuery>) -> Json<Vec<PresetView>> {
    Json(preset_catalog(query.lang))
}

pub async fn get_prayers() -> Json<PrayersResponse> {
    Json(prayers_now())
}

fn prayers_now() -> PrayersResponse {
    let now = Local::now();
    let current = current_prayer();
    PrayersResponse {
        clock: now.format("%I:%M:%S %p").to_string(),
        date: now.format("%A, %B %-d, %Y").to_string(),
        current: current.name,
        prayers: TIMETABLE
            .iter()
            .map(|prayer| PrayerView {
                name: prayer.name,
                arabic_name: prayer.arabic_name,
                time: prayer.display_time(),
                current: prayer.name == current.name,
            })
            .collect(),
        suhoor_ends: suhoor_ends().display_time(),
        iftar_begins: iftar_begins().display_time(),
    }
}

pub async fn get_checklist(State(state): State<AppState>) -> Json<ChecklistResponse> {
    let list = state.checklist.lock().await;
    Json(ChecklistResponse::from_state(&list))
}

pub async fn checklist_toggle(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let mut list = state.checklist.lock().await;
    list.toggle(payload.id)?;
    Ok(Json(ChecklistResponse::from_state(&list)))
}

pub async fn checklist_add(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let mut list = state.checklist.lock().await;
    if list.add(&payload.text).is_none() {
        return Err(AppError::bad_request("task text must not be empty"));
    }
    Ok(Json(ChecklistResponse::from_state(&list)))
}

pub async fn checklist_delete(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let mut list = state.checklist.lock().await;
    list.delete(payload.id)?;
    Ok(Json(ChecklistResponse::from_state(&list)))
}

pub async fn checklist_new_day(State(state): State<AppState>) -> Json<ChecklistResponse> {
    let mut list = state.checklist.lock().await;
    list.new_day();
    Json(ChecklistResponse::from_state(&list))
}

pub async fn checklist_restore(State(state): State<AppState>) -> Json<ChecklistResponse> {
    let mut list = state.checklist.lock().await;
    list.restore_defaults();
    Json(ChecklistResponse::from_state(&list))
}

pub async fn get_tracker(State(state): State<AppState>) -> Json<TrackerResponse> {
    let tracker = state.tracker.lock().await;
    Json(TrackerResponse::from_state(&tracker))
}

pub async fn tracker_update(
    State(state): State<AppState>,
    Json(payload): Json<TrackerUpdateRequest>,
) -> Json<TrackerResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.update(payload.metric, payload.delta);
    Json(TrackerResponse::from_state(&tracker))
}

pub async fn tracker_reset(State(state): State<AppState>) -> Json<TrackerResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.reset();
    Json(TrackerResponse::from_state(&tracker))
}
