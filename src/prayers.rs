use chrono::{Local, Timelike};

/// One entry in the example timetable. Times are fixed minutes-of-day; real
/// location-based computation is deliberately out of scope.
#[derive(Debug, Clone, Copy)]
pub struct Prayer {
    pub name: &'static str,
    pub arabic_name: &'static str,
    /// Minutes since midnight.
    pub minutes: u32,
}

impl Prayer {
    /// 12-hour clock rendering, e.g. "05:30 AM".
    pub fn display_time(&self) -> String {
        let hour24 = self.minutes / 60;
        let minute = self.minutes % 60;
        let (hour12, meridiem) = match hour24 {
            0 => (12, "AM"),
            1..=11 => (hour24, "AM"),
            12 => (12, "PM"),
            _ => (hour24 - 12, "PM"),
        };
        format!("{hour12:02}:{minute:02} {meridiem}")
    }
}

pub const TIMETABLE: &[Prayer] = &[
    Prayer { name: "Fajr", arabic_name: "الفجر", minutes: 5 * 60 + 30 },
    Prayer { name: "Dhuhr", arabic_name: "الظهر", minutes: 13 * 60 + 15 },
    Prayer { name: "Asr", arabic_name: "العصر", minutes: 16 * 60 + 45 },
    Prayer { name: "Maghrib", arabic_name: "المغرب", minutes: 19 * 60 + 20 },
    Prayer { name: "Isha", arabic_name: "العشاء", minutes: 20 * 60 + 45 },
];

/// Suhoor ends at Fajr, iftar begins at Maghrib.
pub fn suhoor_ends() -> Prayer {
    TIMETABLE[0]
}

pub fn iftar_begins() -> Prayer {
    TIMETABLE[3]
}

/// The prayer whose window contains the current local time.
pub fn current_prayer() -> &'static Prayer {
    let now = Local::now();
    current_prayer_at(now.hour() * 60 + now.minute())
}

/// The most recent prayer at or before `now_minutes`; before Fajr the
/// window still belongs to the previous night's Isha.
pub fn current_prayer_at(now_minutes: u32) -> &'static Prayer {
    for (index, prayer) in TIMETABLE.iter().enumerate() {
        if now_minutes < prayer.minutes {
            return if index == 0 {
                &TIMETABLE[TIMETABLE.len() - 1]
            } else {
                &TIMETABLE[index - 1]
            };
        }
    }
    &TIMETABLE[TIMETABLE.len() - 1]
}
