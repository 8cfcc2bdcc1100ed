use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct PresetView {
    id: usize,
    name: String,
    arabic: String,
    target: u64,
}

#[derive(Debug, Deserialize)]
struct TasbeehResponse {
    count: u64,
    sound_enabled: bool,
    remaining: u64,
    progress: f64,
    milestones: Vec<u64>,
    preset: PresetView,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    played_sound: bool,
    pulsed: bool,
    target_reached: bool,
    #[serde(flatten)]
    state: TasbeehResponse,
}

#[derive(Debug, Deserialize)]
struct TaskView {
    id: u64,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ChecklistResponse {
    day: u32,
    completed: usize,
    total: usize,
    tasks: Vec<TaskView>,
}

#[derive(Debug, Deserialize)]
struct TrackerResponse {
    quran_pages: u64,
    sadaqah: u64,
    quran_progress: f64,
}

#[derive(Debug, Deserialize)]
struct PrayerView {
    name: String,
    current: bool,
}

#[derive(Debug, Deserialize)]
struct PrayersResponse {
    current: String,
    prayers: Vec<PrayerView>,
    suhoor_ends: String,
    iftar_begins: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/tasbeeh")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_ramadan_companion"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: String,
    body: Option<serde_json::Value>,
) -> T {
    let mut request = client.post(url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request.send().await.unwrap();
    assert!(response.status().is_success(), "{}", response.status());
    response.json().await.unwrap()
}

/// Server state is shared across tests; start each counter test from a
/// known preset, which also zeroes the count.
async fn select_preset(client: &Client, base: &str, id: usize) -> TasbeehResponse {
    post_json(
        client,
        format!("{base}/api/tasbeeh/preset"),
        Some(serde_json::json!({ "id": id })),
    )
    .await
}

async fn set_sound(client: &Client, base: &str, enabled: bool) -> TasbeehResponse {
    post_json(
        client,
        format!("{base}/api/tasbeeh/sound"),
        Some(serde_json::json!({ "enabled": enabled })),
    )
    .await
}

async fn tap(client: &Client, base: &str) -> CountResponse {
    post_json(client, format!("{base}/api/tasbeeh/count"), None).await
}

#[tokio::test]
async fn http_count_accumulates_and_derives() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let fresh = select_preset(&client, base, 0).await;
    assert_eq!(fresh.count, 0);
    assert_eq!(fresh.preset.target, 33);
    assert_eq!(fresh.remaining, 33);

    for expected in 1..=5 {
        let data = tap(&client, base).await;
        assert_eq!(data.state.count, expected);
    }

    let snapshot: TasbeehResponse = client
        .get(format!("{base}/api/tasbeeh"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snapshot.count, 5);
    assert_eq!(snapshot.remaining, 28);
    assert!(snapshot.progress > 0.0 && snapshot.progress < 1.0);
    assert!(snapshot.milestones.is_empty());
}

#[tokio::test]
async fn http_reset_zeroes_the_count_only() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    select_preset(&client, base, 2).await;
    set_sound(&client, base, false).await;
    for _ in 0..7 {
        tap(&client, base).await;
    }

    let after: TasbeehResponse = post_json(&client, format!("{base}/api/tasbeeh/reset"), None).await;

    assert_eq!(after.count, 0);
    assert_eq!(after.preset.id, 2);
    assert!(!after.sound_enabled);

    set_sound(&client, base, true).await;
}

#[tokio::test]
async fn http_invalid_preset_is_a_bad_request_and_changes_nothing() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    select_preset(&client, base, 1).await;
    tap(&client, base).await;

    let response = client
        .post(format!("{base}/api/tasbeeh/preset"))
        .json(&serde_json::json!({ "id": 99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let snapshot: TasbeehResponse = client
        .get(format!("{base}/api/tasbeeh"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snapshot.preset.id, 1);
    assert_eq!(snapshot.count, 1);
}

#[tokio::test]
async fn http_target_crossing_fires_once_with_one_pulse() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    select_preset(&client, base, 0).await; // target 33

    let mut crossings = Vec::new();
    let mut pulses = Vec::new();
    for _ in 0..40 {
        let data = tap(&client, base).await;
        if data.target_reached {
            crossings.push(data.state.count);
        }
        if data.pulsed {
            pulses.push(data.state.count);
        }
    }

    assert_eq!(crossings, vec![33]);
    assert_eq!(pulses, vec![33]);
}

#[tokio::test]
async fn http_sound_flag_controls_the_cue_not_the_count() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    select_preset(&client, base, 0).await;
    set_sound(&client, base, false).await;

    for expected in 1..=3 {
        let data = tap(&client, base).await;
        assert!(!data.played_sound);
        assert_eq!(data.state.count, expected);
    }

    set_sound(&client, base, true).await;
    let data = tap(&client, base).await;
    assert!(data.played_sound);
    assert_eq!(data.state.count, 4);
}

#[tokio::test]
async fn http_presets_catalog_localizes() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let english: Vec<PresetView> = client
        .get(format!("{base}/api/presets"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(english.len(), 6);
    assert_eq!(english[0].name, "SubhanAllah");
    assert!(english[5].arabic.is_empty(), "custom preset has no script");

    let arabic: Vec<PresetView> = client
        .get(format!("{base}/api/presets?lang=ar"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(arabic[0].name, "سبحان الله");
    assert_eq!(arabic[0].target, english[0].target);
}

#[tokio::test]
async fn http_prayers_lists_the_timetable_with_one_current() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let prayers: PrayersResponse = client
        .get(format!("{}/api/prayers", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(prayers.prayers.len(), 5);
    assert_eq!(prayers.prayers[0].name, "Fajr");
    assert_eq!(
        prayers.prayers.iter().filter(|prayer| prayer.current).count(),
        1
    );
    assert!(prayers.prayers.iter().any(|p| p.name == prayers.current));
    assert_eq!(prayers.suhoor_ends, "05:30 AM");
    assert_eq!(prayers.iftar_begins, "07:20 PM");
}

#[tokio::test]
async fn http_checklist_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let restored: ChecklistResponse =
        post_json(&client, format!("{base}/api/checklist/restore"), None).await;
    assert_eq!(restored.total, 14);
    assert_eq!(restored.completed, 0);

    let toggled: ChecklistResponse = post_json(
        &client,
        format!("{base}/api/checklist/toggle"),
        Some(serde_json::json!({ "id": 1 })),
    )
    .await;
    assert_eq!(toggled.completed, 1);
    assert!(toggled.tasks.iter().any(|task| task.id == 1 && task.completed));

    let added: ChecklistResponse = post_json(
        &client,
        format!("{base}/api/checklist/add"),
        Some(serde_json::json!({ "text": "  Call family before iftar  " })),
    )
    .await;
    assert_eq!(added.total, 15);
    let new_task = added.tasks.last().unwrap();
    assert_eq!(new_task.text, "Call family before iftar");

    let blank = client
        .post(format!("{base}/api/checklist/add"))
        .json(&serde_json::json!({ "text": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);

    let day_before = added.day;
    let next_day: ChecklistResponse =
        post_json(&client, format!("{base}/api/checklist/new-day"), None).await;
    assert_eq!(next_day.day, day_before + 1);
    assert_eq!(next_day.completed, 0);
    assert_eq!(next_day.total, 15, "custom task survives the new day");

    let removed: ChecklistResponse = post_json(
        &client,
        format!("{base}/api/checklist/delete"),
        Some(serde_json::json!({ "id": new_task.id })),
    )
    .await;
    assert_eq!(removed.total, 14);

    let missing = client
        .post(format!("{base}/api/checklist/delete"))
        .json(&serde_json::json!({ "id": new_task.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_tracker_updates_clamp_at_zero() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let fresh: TrackerResponse =
        post_json(&client, format!("{base}/api/tracker/reset"), None).await;
    assert_eq!(fresh.quran_pages, 0);
    assert_eq!(fresh.quran_progress, 0.0);

    let bumped: TrackerResponse = post_json(
        &client,
        format!("{base}/api/tracker/update"),
        Some(serde_json::json!({ "metric": "quran_pages", "delta": 10 })),
    )
    .await;
    assert_eq!(bumped.quran_pages, 10);
    assert!(bumped.quran_progress > 0.0);

    let clamped: TrackerResponse = post_json(
        &client,
        format!("{base}/api/tracker/update"),
        Some(serde_json::json!({ "metric": "sadaqah", "delta": -5 })),
    )
    .await;
    assert_eq!(clamped.sadaqah, 0);
}

#[tokio::test]
async fn http_pages_render() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    for path in ["/", "/tasbeeh", "/prayers", "/checklist", "/tracker", "/education"] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert!(response.status().is_success(), "{path}");
        let body = response.text().await.unwrap();
        assert!(body.contains("<!DOCTYPE html>"), "{path}");
        assert!(body.contains("id=\"theme-toggle\""), "{path}");
        assert!(!body.contains("{{"), "unreplaced token on {path}");
    }

    let rtl = client
        .get(format!("{base}/tasbeeh?lang=ur"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(rtl.contains("dir=\"rtl\""));
}
