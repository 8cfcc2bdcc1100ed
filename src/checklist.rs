use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prayer,
    Quran,
    Spiritual,
    General,
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub category: Category,
}

/// A task id not present in the list. Over HTTP this is a stale or buggy
/// client, reported as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTaskId(pub u64);

impl std::fmt::Display for UnknownTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no task with id {}", self.0)
    }
}

impl std::error::Error for UnknownTaskId {}

const DEFAULT_TASKS: &[(&str, Category)] = &[
    ("Perform Fajr prayer on time", Category::Prayer),
    ("Read morning adhkar", Category::Spiritual),
    ("Read Quran (at least 1 Juz)", Category::Quran),
    ("Perform Dhuhr prayer on time", Category::Prayer),
    ("Perform Asr prayer on time", Category::Prayer),
    ("Prepare for Iftar", Category::General),
    ("Make dua before breaking fast", Category::Spiritual),
    ("Perform Maghrib prayer on time", Category::Prayer),
    ("Perform Isha prayer on time", Category::Prayer),
    ("Perform Taraweeh prayer", Category::Prayer),
    ("Give Sadaqah (charity)", Category::Spiritual),
    ("Read evening adhkar", Category::Spiritual),
    ("Wake up for Suhoor", Category::General),
    ("Make intention for fasting", Category::Spiritual),
];

/// The daily task list plus the 1-based Ramadan day counter. Session-scoped,
/// like everything else in the app.
#[derive(Debug, Clone)]
pub struct Checklist {
    tasks: Vec<Task>,
    day: u32,
    next_id: u64,
}

impl Default for Checklist {
    fn default() -> Self {
        let tasks = default_tasks();
        let next_id = tasks.len() as u64 + 1;
        Self { tasks, day: 1, next_id }
    }
}

fn default_tasks() -> Vec<Task> {
    DEFAULT_TASKS
        .iter()
        .enumerate()
        .map(|(index, &(text, category))| Task {
            id: index as u64 + 1,
            text: text.to_string(),
            completed: false,
            category,
        })
        .collect()
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn completion_percentage(&self) -> f64 {
        if self.tasks.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.tasks.len() as f64 * 100.0
        }
    }

    pub fn toggle(&mut self, id: u64) -> Result<bool, UnknownTaskId> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(UnknownTaskId(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Adds a general-category task. Whitespace-only text is rejected with
    /// `None` so the caller can report it.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            category: Category::General,
        });
        self.tasks.last()
    }

    pub fn delete(&mut self, id: u64) -> Result<(), UnknownTaskId> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Err(UnknownTaskId(id));
        }
        Ok(())
    }

    /// Clears completions and advances the Ramadan day. Custom tasks stay.
    pub fn new_day(&mut self) {
        for task in &mut self.tasks {
            task.completed = false;
        }
        self.day += 1;
    }

    /// Back to the stock list, dropping custom tasks. The day counter is
    /// untouched.
    pub fn restore_defaults(&mut self) {
        self.tasks = default_tasks();
        self.next_id = self.tasks.len() as u64 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_stock_list_on_day_one() {
        let list = Checklist::new();
        assert_eq!(list.tasks().len(), 14);
        assert_eq!(list.day(), 1);
        assert_eq!(list.completed_count(), 0);
        assert!(list.tasks().iter().all(|task| !task.completed));
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut list = Checklist::new();
        assert_eq!(list.toggle(1), Ok(true));
        assert_eq!(list.toggle(1), Ok(false));
        assert_eq!(list.toggle(999), Err(UnknownTaskId(999)));
    }

    #[test]
    fn completion_percentage_tracks_toggles() {
        let mut list = Checklist::new();
        for id in 1..=7 {
            list.toggle(id).unwrap();
        }
        assert_eq!(list.completed_count(), 7);
        assert!((list.completion_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_trims_and_rejects_blank_text() {
        let mut list = Checklist::new();
        assert!(list.add("   ").is_none());

        let task = list.add("  Call family before iftar ").unwrap();
        assert_eq!(task.text, "Call family before iftar");
        assert_eq!(task.category, Category::General);
        let id = task.id;

        assert_eq!(list.tasks().len(), 15);
        list.delete(id).unwrap();
        assert_eq!(list.tasks().len(), 14);
    }

    #[test]
    fn added_ids_stay_unique_after_deletes() {
        let mut list = Checklist::new();
        let first = list.add("one").unwrap().id;
        list.delete(first).unwrap();
        let second = list.add("two").unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn new_day_clears_completions_and_keeps_custom_tasks() {
        let mut list = Checklist::new();
        list.toggle(3).unwrap();
        list.add("custom").unwrap();

        list.new_day();

        assert_eq!(list.day(), 2);
        assert_eq!(list.completed_count(), 0);
        assert_eq!(list.tasks().len(), 15);
    }

    #[test]
    fn restore_defaults_drops_custom_tasks_but_not_the_day() {
        let mut list = Checklist::new();
        list.add("custom").unwrap();
        list.new_day();

        list.restore_defaults();

        assert_eq!(list.tasks().len(), 14);
        assert_eq!(list.day(), 2);
    }
}
