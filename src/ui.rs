use crate::checklist::{Category, Checklist};
use crate::counter::{CounterState, MILESTONES};
use crate::models::PrayersResponse;
use crate::presets::{Locale, PRESETS};
use crate::tracker::Tracker;

/// Strings for the tasbeeh page, the only localized page; the rest of the
/// UI is English.
struct TasbeehStrings {
    title: &'static str,
    subtitle: &'static str,
    select_dhikr: &'static str,
    target: &'static str,
    remaining: &'static str,
    tap_hint: &'static str,
    reset: &'static str,
    sound_on: &'static str,
    sound_off: &'static str,
    milestones: &'static str,
    complete_prompt: &'static str,
}

fn strings(locale: Locale) -> &'static TasbeehStrings {
    match locale {
        Locale::En => &EN_STRINGS,
        Locale::Ar => &AR_STRINGS,
        Locale::Ur => &UR_STRINGS,
    }
}

const EN_STRINGS: TasbeehStrings = TasbeehStrings {
    title: "Digital Tasbeeh",
    subtitle: "Count your daily dhikr",
    select_dhikr: "Select Dhikr",
    target: "Target",
    remaining: "Remaining",
    tap_hint: "Tap or click to count",
    reset: "Reset",
    sound_on: "Sound On",
    sound_off: "Sound Off",
    milestones: "Milestones",
    complete_prompt: "MashAllah! {target} complete. Continue counting?",
};

const AR_STRINGS: TasbeehStrings = TasbeehStrings {
    title: "التسبيح الرقمي",
    subtitle: "عد أذكارك اليومية",
    select_dhikr: "اختر الذكر",
    target: "الهدف",
    remaining: "الباقي",
    tap_hint: "اضغط أو انقر للعد",
    reset: "إعادة تعيين",
    sound_on: "صوت مفعل",
    sound_off: "صوت معطل",
    milestones: "إنجازات",
    complete_prompt: "ما شاء الله! اكتمل {target}. الاستمرار في العد؟",
};

const UR_STRINGS: TasbeehStrings = TasbeehStrings {
    title: "ڈیجیٹل تسبیح",
    subtitle: "اپنے روزانہ اذکار گنیں",
    select_dhikr: "ذکر منتخب کریں",
    target: "ہدف",
    remaining: "باقی",
    tap_hint: "گننے کے لیے ٹیپ کریں",
    reset: "دوبارہ شروع کریں",
    sound_on: "آواز آن",
    sound_off: "آواز بند",
    milestones: "کامیابیاں",
    complete_prompt: "ماشاءاللہ! {target} مکمل۔ گنتی جاری رکھیں؟",
};

pub fn render_home(locale: Locale) -> String {
    let features: &[(&str, &str, &str)] = &[
        (
            "/tasbeeh",
            "Digital Tasbeeh",
            "Count your daily dhikr with presets, milestones and targets",
        ),
        (
            "/prayers",
            "Prayer Times",
            "Keep track of the daily prayers, suhoor and iftar",
        ),
        (
            "/checklist",
            "Daily Checklist",
            "Stay organized with your daily Ramadan tasks",
        ),
        (
            "/tracker",
            "Spiritual Tracker",
            "Track your Quran reading, duas, and good deeds",
        ),
        (
            "/education",
            "Education",
            "Learn about Ramadan, fasting rules, and Islamic knowledge",
        ),
    ];

    let mut cards = String::new();
    for &(href, title, description) in features {
        cards.push_str(&format!(
            "<a class=\"feature\" href=\"{href}\">\
             <span class=\"feature-title\">{title}</span>\
             <span class=\"muted\">{description}</span></a>"
        ));
    }

    let content = HOME_HTML.replace("{{FEATURES}}", &cards);
    page(
        locale,
        "/",
        "Ramadan Mubarak",
        "Prepare for the blessed month with prayer times, spiritual tracking, and educational resources",
        &content,
        "",
    )
}

pub fn render_tasbeeh(state: &CounterState, locale: Locale) -> String {
    let tr = strings(locale);
    let preset = state.preset();

    let mut preset_buttons = String::new();
    for (id, entry) in PRESETS.iter().enumerate() {
        let active = if id == state.active_preset_id() { " active" } else { "" };
        let arabic = if entry.arabic.is_empty() {
            String::new()
        } else {
            format!("<span class=\"arabic\">{}</span>", entry.arabic)
        };
        preset_buttons.push_str(&format!(
            "<button type=\"button\" class=\"preset{active}\" data-id=\"{id}\">\
             <span class=\"preset-name\">{name}</span>{arabic}\
             <span class=\"preset-target\">× {target}</span></button>",
            name = entry.display_name(locale),
            target = entry.target,
        ));
    }

    let mut milestone_badges = String::new();
    for &milestone in MILESTONES {
        let reached = if state.count() >= milestone { " reached" } else { "" };
        milestone_badges.push_str(&format!(
            "<span class=\"badge{reached}\" data-milestone=\"{milestone}\">{milestone}</span>"
        ));
    }

    let phrase = if preset.arabic.is_empty() {
        String::new()
    } else {
        format!(
            "<p id=\"phrase\" class=\"phrase arabic\">{}</p>\
             <p id=\"transliteration\" class=\"muted\">{}</p>",
            preset.arabic, preset.transliteration
        )
    };

    let content = TASBEEH_HTML
        .replace("{{SELECT_DHIKR}}", tr.select_dhikr)
        .replace("{{PRESETS}}", &preset_buttons)
        .replace("{{PHRASE}}", &phrase)
        .replace("{{COUNT}}", &state.count().to_string())
        .replace("{{TARGET_LABEL}}", tr.target)
        .replace("{{TARGET}}", &preset.target.to_string())
        .replace("{{REMAINING_LABEL}}", tr.remaining)
        .replace("{{REMAINING}}", &state.remaining().to_string())
        .replace("{{PROGRESS}}", &format!("{:.1}", state.progress() * 100.0))
        .replace("{{TAP_HINT}}", tr.tap_hint)
        .replace("{{RESET}}", tr.reset)
        .replace(
            "{{SOUND_LABEL}}",
            if state.sound_enabled() { tr.sound_on } else { tr.sound_off },
        )
        .replace("{{MILESTONES_LABEL}}", tr.milestones)
        .replace("{{BADGES}}", &milestone_badges)
        .replace("{{HIDE_MILESTONES}}", if state.count() == 0 { " hidden" } else { "" });

    let script = TASBEEH_JS
        .replace("{{SOUND_ON}}", tr.sound_on)
        .replace("{{SOUND_OFF}}", tr.sound_off)
        .replace("{{PROMPT}}", tr.complete_prompt);

    page(locale, "/tasbeeh", tr.title, tr.subtitle, &content, &script)
}

pub fn render_prayers(prayers: &PrayersResponse, locale: Locale) -> String {
    let mut rows = String::new();
    for prayer in &prayers.prayers {
        let current = if prayer.current { " current" } else { "" };
        rows.push_str(&format!(
            "<div class=\"prayer{current}\" data-name=\"{name}\">\
             <div><span class=\"prayer-name\">{name}</span>\
             <span class=\"arabic\">{arabic}</span></div>\
             <span class=\"prayer-time\">{time}</span></div>",
            name = prayer.name,
            arabic = prayer.arabic_name,
            time = prayer.time,
        ));
    }

    let content = PRAYERS_HTML
        .replace("{{CLOCK}}", &prayers.clock)
        .replace("{{DATE}}", &prayers.date)
        .replace("{{CURRENT}}", prayers.current)
        .replace("{{PRAYERS}}", &rows)
        .replace("{{SUHOOR}}", &prayers.suhoor_ends)
        .replace("{{IFTAR}}", &prayers.iftar_begins);

    page(
        locale,
        "/prayers",
        "Prayer Times",
        "Stay connected with your daily prayers",
        &content,
        PRAYERS_JS,
    )
}

pub fn render_checklist(list: &Checklist, locale: Locale) -> String {
    let mut rows = String::new();
    for task in list.tasks() {
        let done = if task.completed { " done" } else { "" };
        let checked = if task.completed { " checked" } else { "" };
        rows.push_str(&format!(
            "<li class=\"task{done}\"><label>\
             <input type=\"checkbox\" data-id=\"{id}\"{checked} /> \
             <span>{text}</span></label>\
             <span class=\"tag tag-{category}\">{category}</span>\
             <button type=\"button\" class=\"delete\" data-id=\"{id}\">✕</button></li>",
            id = task.id,
            text = escape_html(&task.text),
            category = category_tag(task.category),
        ));
    }

    let content = CHECKLIST_HTML
        .replace("{{DAY}}", &list.day().to_string())
        .replace("{{COMPLETED}}", &list.completed_count().to_string())
        .replace("{{TOTAL}}", &list.tasks().len().to_string())
        .replace("{{PERCENT}}", &format!("{:.0}", list.completion_percentage()))
        .replace("{{TASKS}}", &rows);

    page(
        locale,
        "/checklist",
        "Daily Checklist",
        "Track your daily Ramadan tasks and stay organized",
        &content,
        CHECKLIST_JS,
    )
}

pub fn render_tracker(tracker: &Tracker, locale: Locale) -> String {
    let metrics: &[(&str, &str, u64)] = &[
        ("quran_pages", "Quran Pages Read", tracker.quran_pages),
        ("quran_juz", "Juz Completed", tracker.quran_juz),
        ("taraweeh_rakats", "Taraweeh Rakats", tracker.taraweeh_rakats),
        ("tahajjud_rakats", "Tahajjud Rakats", tracker.tahajjud_rakats),
        ("sadaqah", "Times Given Sadaqah", tracker.sadaqah),
        ("dhikr", "Dhikr Sessions", tracker.dhikr),
        ("dua", "Dua Made", tracker.dua),
        ("prayers_missed", "Prayers Missed", tracker.prayers_missed),
    ];

    let mut rows = String::new();
    for &(key, label, value) in metrics {
        rows.push_str(&format!(
            "<div class=\"metric\"><span class=\"label\">{label}</span>\
             <div class=\"metric-controls\">\
             <button type=\"button\" class=\"step\" data-metric=\"{key}\" data-delta=\"-1\">−</button>\
             <span class=\"value\" id=\"metric-{key}\">{value}</span>\
             <button type=\"button\" class=\"step\" data-metric=\"{key}\" data-delta=\"1\">+</button>\
             </div></div>"
        ));
    }

    let content = TRACKER_HTML
        .replace("{{METRICS}}", &rows)
        .replace("{{QURAN_PROGRESS}}", &format!("{:.1}", tracker.quran_progress()))
        .replace("{{JUZ_PROGRESS}}", &format!("{:.1}", tracker.juz_progress()))
        .replace("{{PAGES}}", &tracker.quran_pages.to_string())
        .replace("{{JUZ}}", &tracker.quran_juz.to_string());

    page(
        locale,
        "/tracker",
        "Spiritual Tracker",
        "Track your worship and good deeds this Ramadan",
        &content,
        TRACKER_JS,
    )
}

pub fn render_education(locale: Locale) -> String {
    page(
        locale,
        "/education",
        "Ramadan Education",
        "Learn about the blessed month and how to make the most of it",
        EDUCATION_HTML,
        EDUCATION_JS,
    )
}

fn category_tag(category: Category) -> &'static str {
    match category {
        Category::Prayer => "prayer",
        Category::Quran => "quran",
        Category::Spiritual => "spiritual",
        Category::General => "general",
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn nav(locale: Locale, active: &str) -> String {
    let suffix = match locale {
        Locale::En => String::new(),
        Locale::Ar => "?lang=ar".to_string(),
        Locale::Ur => "?lang=ur".to_string(),
    };
    let links = [
        ("/", "Home"),
        ("/tasbeeh", "Tasbeeh"),
        ("/prayers", "Prayers"),
        ("/checklist", "Checklist"),
        ("/tracker", "Tracker"),
        ("/education", "Education"),
    ];
    links
        .iter()
        .map(|&(href, label)| {
            let class = if href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}{suffix}\"{class}>{label}</a>")
        })
        .collect()
}

fn lang_switcher(locale: Locale, active: &str) -> String {
    [(Locale::En, "English"), (Locale::Ar, "العربية"), (Locale::Ur, "اردو")]
        .iter()
        .map(|&(lang, label)| {
            let href = match lang {
                Locale::En => active.to_string(),
                Locale::Ar => format!("{active}?lang=ar"),
                Locale::Ur => format!("{active}?lang=ur"),
            };
            let class = if lang == locale { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect()
}

fn page(
    locale: Locale,
    active: &str,
    title: &str,
    subtitle: &str,
    content: &str,
    script: &str,
) -> String {
    SHELL_HTML
        .replace("{{DIR}}", locale.dir())
        .replace("{{TITLE}}", title)
        .replace("{{SUBTITLE}}", subtitle)
        .replace("{{NAV}}", &nav(locale, active))
        .replace("{{LANGS}}", &lang_switcher(locale, active))
        .replace("{{CONTENT}}", content)
        .replace("{{SCRIPT}}", script)
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" dir="{{DIR}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #eef2ff;
      --bg-2: #faf5ff;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #4f46e5;
      --accent-2: #7c3aed;
      --accent-soft: #eef2ff;
      --green: #16a34a;
      --card: rgba(255, 255, 255, 0.92);
      --panel: #ffffff;
      --line: #e5e7eb;
      --shadow: 0 18px 48px rgba(79, 70, 229, 0.14);
    }

    html[data-theme="dark"] {
      --bg-1: #111827;
      --bg-2: #1e1b4b;
      --ink: #e5e7eb;
      --muted: #9ca3af;
      --accent: #818cf8;
      --accent-2: #a78bfa;
      --accent-soft: #312e81;
      --card: rgba(31, 41, 55, 0.92);
      --panel: #1f2937;
      --line: #374151;
      --shadow: 0 18px 48px rgba(0, 0, 0, 0.45);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(760px, 100%);
      display: grid;
      gap: 20px;
    }

    nav {
      display: flex;
      justify-content: center;
      gap: 8px;
      flex-wrap: wrap;
    }

    nav a, .langs a {
      text-decoration: none;
      color: var(--muted);
      padding: 8px 16px;
      border-radius: 999px;
      font-weight: 600;
    }

    nav a.active {
      background: var(--panel);
      color: var(--accent);
      box-shadow: var(--shadow);
    }

    .theme-toggle {
      border: 1px solid var(--line);
      border-radius: 999px;
      background: var(--panel);
      padding: 6px 14px;
      cursor: pointer;
      font-size: 1rem;
    }

    .langs {
      display: flex;
      justify-content: center;
      gap: 4px;
      font-size: 0.85rem;
    }

    .langs a.active { color: var(--accent); }

    header { text-align: center; }
    header h1 { margin: 0 0 6px; font-size: 1.9rem; }
    header p { margin: 0; color: var(--muted); }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .card h2 { margin: 0 0 12px; font-size: 1.05rem; }

    .arabic { font-size: 1.3rem; display: block; }
    .muted { color: var(--muted); }
    .hidden { display: none; }

    .presets {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 10px;
    }

    .preset {
      background: var(--panel);
      border: 2px solid var(--line);
      border-radius: 14px;
      padding: 10px;
      cursor: pointer;
      text-align: center;
      display: grid;
      gap: 4px;
    }

    .preset.active { border-color: var(--accent); background: var(--accent-soft); }
    .preset-name { font-weight: 600; }
    .preset-target { font-size: 0.8rem; color: var(--muted); }

    .counter { text-align: center; display: grid; gap: 14px; }
    .phrase { font-size: 2.6rem; margin: 0; }
    #count { font-size: 5.5rem; font-weight: 700; color: var(--accent); line-height: 1; }

    .bar { width: 100%; background: var(--line); border-radius: 999px; height: 10px; }
    .bar-fill {
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      height: 10px;
      border-radius: 999px;
      transition: width 200ms ease;
    }

    .tap {
      width: 190px;
      height: 190px;
      margin: 0 auto;
      border: none;
      border-radius: 50%;
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      color: white;
      font-size: 4rem;
      cursor: pointer;
      box-shadow: var(--shadow);
    }

    .tap:active { transform: scale(0.97); }

    button {
      font-family: inherit;
      font-size: 0.95rem;
    }

    .controls { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }

    .btn {
      border: 1px solid var(--line);
      border-radius: 12px;
      background: var(--panel);
      color: var(--ink);
      padding: 12px;
      font-weight: 600;
      cursor: pointer;
    }

    .badges { display: flex; flex-wrap: wrap; gap: 8px; }

    .badge {
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.8rem;
      font-weight: 600;
      background: var(--panel);
      color: #9ca3af;
      border: 1px solid var(--line);
    }

    .badge.reached { background: var(--green); color: white; border-color: var(--green); }

    .prayer {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 12px 16px;
      border-radius: 14px;
      border: 1px solid var(--line);
      margin-bottom: 10px;
      background: var(--panel);
    }

    .prayer.current { border-color: var(--accent); background: var(--accent-soft); }
    .prayer-name { font-weight: 600; margin-inline-end: 10px; }
    .prayer-time { font-weight: 700; }

    .tasks { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }

    .task {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 10px 12px;
      border: 1px solid var(--line);
      border-radius: 12px;
      background: var(--panel);
    }

    .task label { flex: 1; display: flex; gap: 8px; align-items: center; cursor: pointer; }
    .task.done span { text-decoration: line-through; color: #9ca3af; }

    .tag {
      font-size: 0.7rem;
      padding: 2px 8px;
      border-radius: 999px;
      border: 1px solid;
    }

    .tag-prayer { color: #1d4ed8; border-color: #93c5fd; background: #eff6ff; }
    .tag-quran { color: #15803d; border-color: #86efac; background: #f0fdf4; }
    .tag-spiritual { color: #7e22ce; border-color: #d8b4fe; background: #faf5ff; }
    .tag-general { color: #374151; border-color: #d1d5db; background: #f9fafb; }

    .delete { border: none; background: none; color: #9ca3af; cursor: pointer; }

    .add-row { display: flex; gap: 8px; margin-top: 12px; }
    .add-row input {
      flex: 1;
      padding: 10px 12px;
      border: 1px solid var(--line);
      border-radius: 12px;
      font-size: 0.95rem;
      background: var(--panel);
      color: var(--ink);
    }

    .metric {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid var(--line);
    }

    .metric:last-child { border-bottom: none; }
    .metric-controls { display: flex; align-items: center; gap: 12px; }

    .step {
      width: 34px;
      height: 34px;
      border-radius: 50%;
      border: 1px solid var(--line);
      background: var(--panel);
      color: var(--ink);
      cursor: pointer;
      font-size: 1.1rem;
    }

    .value { min-width: 2.5em; text-align: center; font-weight: 700; }
    .label { color: var(--muted); }

    .split { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
    .big { font-size: 1.6rem; font-weight: 700; color: var(--accent-2); margin: 4px 0 0; }

    .features {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 12px;
    }

    .feature {
      display: grid;
      gap: 6px;
      padding: 16px;
      border: 1px solid var(--line);
      border-radius: 14px;
      background: var(--panel);
      text-decoration: none;
      color: var(--ink);
    }

    .feature:hover { border-color: var(--accent); }
    .feature-title { font-weight: 600; color: var(--accent); }

    .cols {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .quote { font-style: italic; text-align: center; color: var(--muted); }

    .topics { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; }

    .topic-btn {
      border: 2px solid var(--line);
      border-radius: 12px;
      background: var(--panel);
      color: var(--ink);
      padding: 10px 14px;
      font-weight: 600;
      cursor: pointer;
    }

    .topic-btn.active { border-color: var(--accent); color: var(--accent); background: var(--accent-soft); }

    .topic h3 { margin: 18px 0 6px; font-size: 1.05rem; }
    .topic h3:first-child { margin-top: 0; }
    .topic ul { margin: 0; padding-inline-start: 20px; display: grid; gap: 6px; }

    .note {
      border-inline-start: 4px solid var(--accent);
      background: var(--accent-soft);
      border-radius: 0 10px 10px 0;
      padding: 12px 14px;
      margin-top: 14px;
    }

    .dua {
      border: 1px solid var(--line);
      border-radius: 14px;
      background: var(--panel);
      padding: 14px;
      margin-top: 12px;
    }

    .dua .arabic { font-size: 1.4rem; text-align: end; margin: 8px 0; }
    .dua .transliteration { font-style: italic; color: var(--muted); margin: 0 0 6px; }

    .status { min-height: 1.2em; color: var(--muted); font-size: 0.9rem; text-align: center; }
    .status[data-type="error"] { color: #c0392b; }
  </style>
</head>
<body>
  <main class="app">
    <nav>{{NAV}}<button type="button" class="theme-toggle" id="theme-toggle" aria-label="Toggle theme">🌙</button></nav>
    <header>
      <h1>{{TITLE}}</h1>
      <p>{{SUBTITLE}}</p>
    </header>
    {{CONTENT}}
    <div class="status" id="status"></div>
    <div class="langs">{{LANGS}}</div>
  </main>
  <script>
    const themeBtn = document.getElementById('theme-toggle');

    const applyTheme = (theme) => {
      document.documentElement.dataset.theme = theme;
      themeBtn.textContent = theme === 'dark' ? '☀️' : '🌙';
    };

    applyTheme(localStorage.getItem('theme') === 'dark' ? 'dark' : 'light');

    themeBtn.addEventListener('click', () => {
      const next = document.documentElement.dataset.theme === 'dark' ? 'light' : 'dark';
      localStorage.setItem('theme', next);
      applyTheme(next);
    });

    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? null : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    {{SCRIPT}}
  </script>
</body>
</html>
"#;

const HOME_HTML: &str = r#"<section class="card">
      <h2>About Ramadan</h2>
      <p class="muted" style="margin:0 0 10px">
        Ramadan is the ninth month of the Islamic lunar calendar and is considered
        the holiest month for Muslims worldwide. During this month, Muslims fast from
        dawn until sunset, abstaining from food, drink, and other physical needs.
        This is a time for spiritual reflection, increased devotion, worship, and charity.
      </p>
      <p class="muted" style="margin:0">
        The month of Ramadan is when the Quran was revealed to Prophet Muhammad
        (peace be upon him). Muslims believe that during this month the gates of heaven
        are opened and the gates of hell are closed, making it an ideal time for seeking
        forgiveness and drawing closer to Allah.
      </p>
    </section>

    <div class="features">{{FEATURES}}</div>

    <section class="card">
      <h2>Benefits of Fasting</h2>
      <div class="cols">
        <div>
          <strong>Spiritual Growth</strong>
          <p class="muted" style="margin:4px 0 0;font-size:0.9rem">
            Develop self-discipline, patience, and empathy for those less fortunate
          </p>
        </div>
        <div>
          <strong>Physical Health</strong>
          <p class="muted" style="margin:4px 0 0;font-size:0.9rem">
            Detoxification, improved metabolism, and better eating habits
          </p>
        </div>
        <div>
          <strong>Community</strong>
          <p class="muted" style="margin:4px 0 0;font-size:0.9rem">
            Strengthen bonds through shared experiences and group prayers
          </p>
        </div>
      </div>
    </section>

    <blockquote class="quote">
      "O you who have believed, decreed upon you is fasting as it was decreed
      upon those before you that you may become righteous"
      <footer style="margin-top:6px;font-style:normal">— Quran 2:183</footer>
    </blockquote>"#;

const TASBEEH_HTML: &str = r#"<section class="card">
      <h2>{{SELECT_DHIKR}}</h2>
      <div class="presets" id="presets">{{PRESETS}}</div>
    </section>

    <section class="card counter">
      <div id="phrase-area">{{PHRASE}}</div>
      <div>
        <div id="count">{{COUNT}}</div>
        <div class="muted">
          {{TARGET_LABEL}}: <span id="target">{{TARGET}}</span> |
          {{REMAINING_LABEL}}: <span id="remaining">{{REMAINING}}</span>
        </div>
      </div>
      <div class="bar"><div class="bar-fill" id="progress" style="width: {{PROGRESS}}%"></div></div>
      <form id="tap-form" method="post" action="/count/tap">
        <button class="tap" id="tap" type="submit">+</button>
      </form>
      <p class="muted">{{TAP_HINT}}</p>
    </section>

    <section class="controls">
      <form id="reset-form" method="post" action="/count/reset">
        <button class="btn" id="reset" type="submit" style="width:100%">{{RESET}}</button>
      </form>
      <button class="btn" id="sound" type="button">{{SOUND_LABEL}}</button>
    </section>

    <section class="card{{HIDE_MILESTONES}}" id="milestones">
      <h2>{{MILESTONES_LABEL}}</h2>
      <div class="badges">{{BADGES}}</div>
    </section>"#;

const TASBEEH_JS: &str = r#"const countEl = document.getElementById('count');
    const targetEl = document.getElementById('target');
    const remainingEl = document.getElementById('remaining');
    const progressEl = document.getElementById('progress');
    const phraseArea = document.getElementById('phrase-area');
    const soundBtn = document.getElementById('sound');
    const milestonesCard = document.getElementById('milestones');
    const badges = Array.from(document.querySelectorAll('.badge'));
    const presetButtons = Array.from(document.querySelectorAll('.preset'));

    let soundEnabled = soundBtn.textContent.trim() === '{{SOUND_ON}}';

    const playClick = () => {
      const ctx = new (window.AudioContext || window.webkitAudioContext)();
      const oscillator = ctx.createOscillator();
      const gain = ctx.createGain();
      oscillator.connect(gain);
      gain.connect(ctx.destination);
      oscillator.frequency.value = 800;
      oscillator.type = 'sine';
      gain.gain.value = 0.1;
      oscillator.start(ctx.currentTime);
      oscillator.stop(ctx.currentTime + 0.05);
    };

    const applyState = (state) => {
      countEl.textContent = state.count;
      targetEl.textContent = state.preset.target;
      remainingEl.textContent = state.remaining;
      progressEl.style.width = (state.progress * 100).toFixed(1) + '%';
      soundEnabled = state.sound_enabled;
      soundBtn.textContent = soundEnabled ? '{{SOUND_ON}}' : '{{SOUND_OFF}}';
      milestonesCard.classList.toggle('hidden', state.count === 0);
      badges.forEach((badge) => {
        const milestone = Number(badge.dataset.milestone);
        badge.classList.toggle('reached', state.count >= milestone);
      });
      presetButtons.forEach((button) => {
        button.classList.toggle('active', Number(button.dataset.id) === state.preset.id);
      });
      if (state.preset.arabic) {
        phraseArea.innerHTML =
          '<p id="phrase" class="phrase arabic"></p><p id="transliteration" class="muted"></p>';
        document.getElementById('phrase').textContent = state.preset.arabic;
        document.getElementById('transliteration').textContent = state.preset.transliteration;
      } else {
        phraseArea.innerHTML = '';
      }
    };

    const tap = async () => {
      const data = await post('/api/tasbeeh/count');
      if (data.played_sound) {
        playClick();
      }
      if (data.pulsed && 'vibrate' in navigator) {
        navigator.vibrate(200);
      }
      applyState(data);
      if (data.target_reached) {
        setTimeout(async () => {
          const message = '{{PROMPT}}'.replace('{target}', data.preset.target);
          if (!confirm(message)) {
            applyState(await post('/api/tasbeeh/reset'));
          }
        }, 300);
      }
    };

    document.getElementById('tap-form').addEventListener('submit', (event) => {
      event.preventDefault();
      tap().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/tasbeeh/reset')
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });

    soundBtn.addEventListener('click', () => {
      post('/api/tasbeeh/sound', { enabled: !soundEnabled })
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });

    presetButtons.forEach((button) => {
      button.addEventListener('click', () => {
        post('/api/tasbeeh/preset', { id: Number(button.dataset.id) })
          .then(applyState)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });"#;

const PRAYERS_HTML: &str = r#"<section class="card" style="text-align:center">
      <div class="big" id="clock">{{CLOCK}}</div>
      <p class="muted" id="date">{{DATE}}</p>
    </section>

    <section class="card" style="text-align:center">
      <p class="muted" style="margin:0">Current Prayer Time</p>
      <p class="big" id="current" style="color:var(--green)">{{CURRENT}}</p>
    </section>

    <section class="card">
      {{PRAYERS}}
    </section>

    <section class="card">
      <h2>Ramadan Timing</h2>
      <div class="split">
        <div>
          <p class="muted" style="margin:0">Suhoor Ends (Fajr)</p>
          <p class="big">{{SUHOOR}}</p>
          <p class="muted" style="font-size:0.8rem">Stop eating/drinking</p>
        </div>
        <div>
          <p class="muted" style="margin:0">Iftar (Maghrib)</p>
          <p class="big">{{IFTAR}}</p>
          <p class="muted" style="font-size:0.8rem">Break your fast</p>
        </div>
      </div>
    </section>

    <section class="card">
      <p class="muted" style="margin:0;font-size:0.85rem">
        <strong>Note:</strong> These are example prayer times. For accurate times based on
        your exact location, please enable location services or manually set your city.
      </p>
    </section>"#;

const PRAYERS_JS: &str = r#"const clockEl = document.getElementById('clock');
    const dateEl = document.getElementById('date');
    const currentEl = document.getElementById('current');

    const tickClock = () => {
      const now = new Date();
      clockEl.textContent = now.toLocaleTimeString('en-US', { hour12: true });
    };

    const refresh = async () => {
      const res = await fetch('/api/prayers');
      if (!res.ok) {
        throw new Error('Unable to load prayer times');
      }
      const data = await res.json();
      dateEl.textContent = data.date;
      currentEl.textContent = data.current;
      document.querySelectorAll('.prayer').forEach((row) => {
        row.classList.toggle('current', row.dataset.name === data.current);
      });
    };

    setInterval(tickClock, 1000);
    setInterval(() => refresh().catch((err) => setStatus(err.message, 'error')), 60000);
    tickClock();"#;

const CHECKLIST_HTML: &str = r#"<section class="card">
      <div class="split" style="align-items:center">
        <div>
          <p class="muted" style="margin:0">Ramadan Day</p>
          <p class="big"><span id="day">{{DAY}}</span>/30</p>
        </div>
        <div style="display:grid;gap:8px">
          <button class="btn" id="new-day" type="button">New Day</button>
          <button class="btn" id="restore" type="button">Restore Defaults</button>
        </div>
      </div>
    </section>

    <section class="card">
      <div style="display:flex;justify-content:space-between;align-items:center">
        <h2 style="margin:0">Today's Progress</h2>
        <span class="muted"><span id="completed">{{COMPLETED}}</span>/<span id="total">{{TOTAL}}</span></span>
      </div>
      <div class="bar" style="margin-top:10px">
        <div class="bar-fill" id="progress" style="width: {{PERCENT}}%"></div>
      </div>
    </section>

    <section class="card">
      <ul class="tasks" id="tasks">{{TASKS}}</ul>
      <form class="add-row" id="add-form">
        <input id="new-task" type="text" placeholder="Add a new task..." />
        <button class="btn" type="submit">Add</button>
      </form>
    </section>"#;

const CHECKLIST_JS: &str = r#"const tasksEl = document.getElementById('tasks');
    const dayEl = document.getElementById('day');
    const completedEl = document.getElementById('completed');
    const totalEl = document.getElementById('total');
    const progressEl = document.getElementById('progress');
    const newTaskEl = document.getElementById('new-task');

    const renderTask = (task) => {
      const item = document.createElement('li');
      item.className = task.completed ? 'task done' : 'task';

      const label = document.createElement('label');
      const checkbox = document.createElement('input');
      checkbox.type = 'checkbox';
      checkbox.dataset.id = task.id;
      checkbox.checked = task.completed;
      const text = document.createElement('span');
      text.textContent = task.text;
      label.append(checkbox, ' ', text);

      const tag = document.createElement('span');
      tag.className = 'tag tag-' + task.category;
      tag.textContent = task.category;

      const remove = document.createElement('button');
      remove.type = 'button';
      remove.className = 'delete';
      remove.dataset.id = task.id;
      remove.textContent = '✕';

      item.append(label, tag, remove);
      return item;
    };

    const applyState = (state) => {
      dayEl.textContent = state.day;
      completedEl.textContent = state.completed;
      totalEl.textContent = state.total;
      progressEl.style.width = state.completion_percentage.toFixed(0) + '%';
      tasksEl.replaceChildren(...state.tasks.map(renderTask));
    };

    tasksEl.addEventListener('change', (event) => {
      const id = Number(event.target.dataset.id);
      post('/api/checklist/toggle', { id })
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });

    tasksEl.addEventListener('click', (event) => {
      if (!event.target.classList.contains('delete')) {
        return;
      }
      post('/api/checklist/delete', { id: Number(event.target.dataset.id) })
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = newTaskEl.value;
      if (!text.trim()) {
        return;
      }
      post('/api/checklist/add', { text })
        .then((state) => {
          newTaskEl.value = '';
          applyState(state);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('new-day').addEventListener('click', () => {
      if (!confirm('Reset all tasks for a new day?')) {
        return;
      }
      post('/api/checklist/new-day')
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('restore').addEventListener('click', () => {
      if (!confirm('Reset to default checklist? This will remove custom tasks.')) {
        return;
      }
      post('/api/checklist/restore')
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });"#;

const TRACKER_HTML: &str = r#"<section class="card">
      <h2>Quran Reading</h2>
      <div class="muted">Pages Read: <span id="pages-label">{{PAGES}}</span>/604</div>
      <div class="bar" style="margin:8px 0 14px">
        <div class="bar-fill" id="quran-progress" style="width: {{QURAN_PROGRESS}}%"></div>
      </div>
      <div class="muted">Juz Completed: <span id="juz-label">{{JUZ}}</span>/30</div>
      <div class="bar" style="margin-top:8px">
        <div class="bar-fill" id="juz-progress" style="width: {{JUZ_PROGRESS}}%"></div>
      </div>
    </section>

    <section class="card">
      {{METRICS}}
    </section>

    <section class="controls" style="grid-template-columns:1fr">
      <button class="btn" id="reset-all" type="button">Reset All Counters</button>
    </section>"#;

const TRACKER_JS: &str = r#"const applyState = (state) => {
      for (const [key, value] of Object.entries(state)) {
        const el = document.getElementById('metric-' + key);
        if (el) {
          el.textContent = value;
        }
      }
      document.getElementById('pages-label').textContent = state.quran_pages;
      document.getElementById('juz-label').textContent = state.quran_juz;
      document.getElementById('quran-progress').style.width = state.quran_progress.toFixed(1) + '%';
      document.getElementById('juz-progress').style.width = state.juz_progress.toFixed(1) + '%';
    };

    document.querySelectorAll('.step').forEach((button) => {
      button.addEventListener('click', () => {
        post('/api/tracker/update', {
          metric: button.dataset.metric,
          delta: Number(button.dataset.delta)
        })
          .then(applyState)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('reset-all').addEventListener('click', () => {
      if (!confirm('Are you sure you want to reset all counters?')) {
        return;
      }
      post('/api/tracker/reset')
        .then(applyState)
        .catch((err) => setStatus(err.message, 'error'));
    });"#;

const EDUCATION_HTML: &str = r#"<div class="topics">
      <button type="button" class="topic-btn active" data-topic="basics">Ramadan Basics</button>
      <button type="button" class="topic-btn" data-topic="rules">Fasting Rules</button>
      <button type="button" class="topic-btn" data-topic="deeds">Good Deeds</button>
      <button type="button" class="topic-btn" data-topic="duas">Important Duas</button>
      <button type="button" class="topic-btn" data-topic="tips">Practical Tips</button>
    </div>

    <section class="card topic" id="topic-basics">
      <h3>What is Ramadan?</h3>
      <p class="muted">
        Ramadan is the ninth month of the Islamic lunar calendar, during which Muslims
        worldwide observe a month of fasting from dawn to sunset. It commemorates the
        first revelation of the Quran to Prophet Muhammad (peace be upon him).
      </p>
      <h3>Why Do Muslims Fast?</h3>
      <ul>
        <li>To obey Allah's command and fulfill one of the Five Pillars of Islam</li>
        <li>To develop self-discipline and patience (Sabr)</li>
        <li>To understand the suffering of those who are less fortunate</li>
        <li>To purify the soul and develop God-consciousness (Taqwa)</li>
        <li>To seek forgiveness for past sins</li>
      </ul>
      <div class="note">
        "O you who have believed, decreed upon you is fasting as it was decreed upon
        those before you that you may become righteous." (Quran 2:183)
      </div>
    </section>

    <section class="card topic hidden" id="topic-rules">
      <h3>Who Must Fast?</h3>
      <ul>
        <li>Every adult Muslim (reached puberty)</li>
        <li>Must be mentally and physically able</li>
        <li>Must be in a state of ritual purity</li>
      </ul>
      <h3>Who is Exempt?</h3>
      <ul>
        <li>Children who have not reached puberty</li>
        <li>The elderly who cannot physically fast</li>
        <li>Those who are ill or traveling</li>
        <li>Pregnant or nursing women if fasting may harm them or their child</li>
        <li>Women during menstruation or postpartum bleeding</li>
      </ul>
      <div class="note">
        <strong>Note:</strong> Those who miss fasts due to valid reasons must make them
        up later. Those who cannot fast at all should feed a poor person for each day
        missed (Fidya).
      </div>
      <h3>What Breaks the Fast?</h3>
      <ul>
        <li>Eating or drinking anything</li>
        <li>Smoking or vaping</li>
        <li>Intentional vomiting</li>
        <li>Sexual relations</li>
        <li>Menstruation or postpartum bleeding</li>
      </ul>
    </section>

    <section class="card topic hidden" id="topic-deeds">
      <h3>Reading Quran</h3>
      <p class="muted">
        Try to complete the entire Quran during Ramadan. Many divide it into 30 parts
        (Juz), reading one per day. Each letter brings rewards multiplied many times.
      </p>
      <h3>Night Prayers (Taraweeh &amp; Tahajjud)</h3>
      <p class="muted">
        Offer Taraweeh prayers after Isha and wake up for Tahajjud before Fajr.
        These voluntary prayers bring immense rewards during Ramadan.
      </p>
      <h3>Charity (Sadaqah &amp; Zakat)</h3>
      <p class="muted">
        Give generously to the poor and needy. The Prophet (PBUH) was most generous
        during Ramadan. Calculate and pay your Zakat during this blessed month.
      </p>
      <h3>Dua (Supplication)</h3>
      <p class="muted">
        Make sincere dua throughout the day, especially at the time of breaking the
        fast. The dua of a fasting person is not rejected.
      </p>
      <h3>Seek Laylatul Qadr</h3>
      <p class="muted">
        The Night of Decree is better than 1000 months. It typically falls in the last
        10 nights of Ramadan, especially on odd nights (21, 23, 25, 27, 29).
      </p>
      <h3>Good Character</h3>
      <p class="muted">
        Control your anger, speak kindly, forgive others, maintain family ties, and
        avoid backbiting and idle talk. Fasting is not just from food and drink.
      </p>
    </section>

    <section class="card topic hidden" id="topic-duas">
      <div class="dua">
        <strong>Dua for Starting Fast (Suhoor)</strong>
        <p class="arabic">وَبِصَوْمِ غَدٍ نَّوَيْتُ مِنْ شَهْرِ رَمَضَانَ</p>
        <p class="transliteration">"Wa bisawmi ghadinn nawaiytu min shahri ramadan"</p>
        <p class="muted" style="margin:0">I intend to fast tomorrow for the month of Ramadan.</p>
      </div>
      <div class="dua">
        <strong>Dua for Breaking Fast (Iftar)</strong>
        <p class="arabic">اللَّهُمَّ إِنِّي لَكَ صُمْتُ وَبِكَ آمَنْتُ وَعَلَيْكَ تَوَكَّلْتُ وَعَلَى رِزْقِكَ أَفْطَرْتُ</p>
        <p class="transliteration">"Allahumma inni laka sumtu wa bika aamantu wa 'alayka tawakkaltu wa 'ala rizq-ika aftartu"</p>
        <p class="muted" style="margin:0">
          O Allah! I fasted for You and I believe in You and I put my trust in You and
          I break my fast with Your sustenance.
        </p>
      </div>
      <div class="dua">
        <strong>Short Iftar Dua</strong>
        <p class="arabic">ذَهَبَ الظَّمَأُ وَابْتَلَّتِ الْعُرُوقُ وَثَبَتَ الأَجْرُ إِنْ شَاءَ اللَّهُ</p>
        <p class="transliteration">"Dhahaba al-zama' wa abtalat al-'urooq wa thabat al-ajr in sha Allah"</p>
        <p class="muted" style="margin:0">
          The thirst is gone, the veins are moistened, and the reward is confirmed,
          if Allah wills.
        </p>
      </div>
      <div class="dua">
        <strong>Laylatul Qadr Dua</strong>
        <p class="arabic">اللَّهُمَّ إِنَّكَ عَفُوٌّ تُحِبُّ الْعَفْوَ فَاعْفُ عَنِّي</p>
        <p class="transliteration">"Allahumma innaka 'afuwwun tuhibbul 'afwa fa'fu 'anni"</p>
        <p class="muted" style="margin:0">
          O Allah, You are Forgiving and love forgiveness, so forgive me.
        </p>
      </div>
    </section>

    <section class="card topic hidden" id="topic-tips">
      <h3>Suhoor is Essential</h3>
      <p class="muted">
        Never skip suhoor. Wake up early and eat a nutritious meal with dates, fruits,
        complex carbs, and plenty of water.
      </p>
      <h3>Break Fast Gradually</h3>
      <p class="muted">
        Start with dates and water, pray Maghrib, then eat a moderate meal.
        Avoid overeating to prevent discomfort.
      </p>
      <h3>Stay Hydrated</h3>
      <p class="muted">
        Drink plenty of water between iftar and suhoor. Avoid caffeinated drinks
        that can cause dehydration.
      </p>
      <h3>Manage Energy</h3>
      <p class="muted">
        Take short naps if needed. Reduce strenuous activities during peak heat hours.
        Prioritize rest to maintain energy for worship.
      </p>
      <h3>Control Your Tongue</h3>
      <p class="muted">
        The Prophet (PBUH) said: "Whoever does not give up false speech and evil
        actions, Allah is not in need of his leaving his food and drink."
      </p>
      <h3>Set Spiritual Goals</h3>
      <p class="muted">
        Set realistic goals: complete the Quran, memorize new Surahs, increase charity,
        improve character, fix relationships, and seek knowledge.
      </p>
      <h3>Last 10 Nights</h3>
      <p class="muted">
        Increase worship in the last 10 nights. Perform I'tikaf if possible.
        Seek Laylatul Qadr with sincere devotion.
      </p>
    </section>

    <div class="quote">
      May Allah accept our fasts and make this Ramadan a means of forgiveness and
      mercy for all of us. Ameen.
    </div>"#;

const EDUCATION_JS: &str = r#"const topicButtons = Array.from(document.querySelectorAll('.topic-btn'));
    const topicPanels = Array.from(document.querySelectorAll('.topic'));

    topicButtons.forEach((button) => {
      button.addEventListener('click', () => {
        topicButtons.forEach((b) => b.classList.toggle('active', b === button));
        topicPanels.forEach((panel) => {
          panel.classList.toggle('hidden', panel.id !== 'topic-' + button.dataset.topic);
        });
      });
    });"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::NoFeedback;

    #[test]
    fn home_page_links_every_feature() {
        let html = render_home(Locale::En);
        assert!(html.contains("Ramadan Mubarak"));
        for href in ["/tasbeeh", "/prayers", "/checklist", "/tracker", "/education"] {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
        assert!(!html.contains("{{"), "unreplaced template token");
    }

    #[test]
    fn education_page_renders_every_topic() {
        let html = render_education(Locale::En);
        for topic in ["basics", "rules", "deeds", "duas", "tips"] {
            assert!(html.contains(&format!("id=\"topic-{topic}\"")), "missing {topic}");
        }
        assert!(html.contains("Laylatul Qadr"));
        assert!(!html.contains("{{"), "unreplaced template token");
    }

    #[test]
    fn shell_persists_the_theme_choice() {
        let html = render_home(Locale::En);
        assert!(html.contains("id=\"theme-toggle\""));
        assert!(html.contains("localStorage.getItem('theme')"));
        assert!(html.contains("localStorage.setItem('theme', next)"));
        assert!(html.contains("html[data-theme=\"dark\"]"));
    }

    #[test]
    fn tasbeeh_page_renders_state_and_catalog() {
        let mut state = CounterState::new();
        let mut feedback = NoFeedback;
        for _ in 0..5 {
            state.increment(&mut feedback);
        }

        let html = render_tasbeeh(&state, Locale::En);

        assert!(html.contains("Digital Tasbeeh"));
        assert!(html.contains("<div id=\"count\">5</div>"));
        assert!(html.contains("SubhanAllah"));
        assert!(html.contains("data-id=\"5\""));
        assert!(!html.contains("{{"), "unreplaced template token");
    }

    #[test]
    fn tasbeeh_page_localizes_and_flips_direction() {
        let state = CounterState::new();
        let html = render_tasbeeh(&state, Locale::Ar);
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("التسبيح الرقمي"));

        let html = render_tasbeeh(&state, Locale::En);
        assert!(html.contains("dir=\"ltr\""));
    }

    #[test]
    fn checklist_page_escapes_task_text() {
        let mut list = Checklist::new();
        list.add("<script>alert(1)</script>").unwrap();

        let html = render_checklist(&list, Locale::En);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn tracker_page_renders_every_metric() {
        let tracker = Tracker::new();
        let html = render_tracker(&tracker, Locale::En);
        for key in [
            "quran_pages",
            "quran_juz",
            "prayers_missed",
            "taraweeh_rakats",
            "tahajjud_rakats",
            "sadaqah",
            "dhikr",
            "dua",
        ] {
            assert!(html.contains(&format!("metric-{key}")), "missing {key}");
        }
    }
}
