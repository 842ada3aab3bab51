//! Weekly expense reminders
//!
//! A reminder fires once a week on a chosen day and time, nudging the user to
//! log the week's expenses. Projection is deterministic: callers pass `now`.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::notify::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSchedule {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_day")]
    pub day: Weekday,

    #[serde(default = "default_time")]
    pub time: NaiveTime,
}

fn default_day() -> Weekday {
    Weekday::Sun
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self {
            enabled: false,
            day: default_day(),
            time: default_time(),
        }
    }
}

impl ReminderSchedule {
    pub fn weekly(day: Weekday, time: NaiveTime) -> Self {
        Self {
            enabled: true,
            day,
            time,
        }
    }

    /// The next reminder strictly after `now`, or `None` when disabled
    pub fn next_after(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.enabled {
            return None;
        }

        let today = now.date();
        let days_ahead = (7 + self.day.num_days_from_monday()
            - today.weekday().num_days_from_monday())
            % 7;
        let candidate = (today + Duration::days(i64::from(days_ahead))).and_time(self.time);

        if candidate > now {
            Some(candidate)
        } else {
            Some(candidate + Duration::days(7))
        }
    }

    /// Short description, e.g. "every Sun at 18:00"
    pub fn describe(&self) -> String {
        if self.enabled {
            format!("every {} at {}", self.day, self.time.format("%H:%M"))
        } else {
            "disabled".to_string()
        }
    }

    /// The notification shown when a reminder fires
    pub fn notification(&self) -> Notification {
        Notification::info(
            "Expense Reminder",
            "Don't forget to update your expenses for this week!",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn sunday_six_pm() -> ReminderSchedule {
        ReminderSchedule::weekly(Weekday::Sun, NaiveTime::from_hms_opt(18, 0, 0).unwrap())
    }

    #[test]
    fn test_disabled_has_no_next() {
        assert!(ReminderSchedule::default()
            .next_after(at(2024, 3, 28, 9, 0))
            .is_none());
    }

    #[test]
    fn test_next_later_in_week() {
        // Thursday -> the coming Sunday
        let next = sunday_six_pm().next_after(at(2024, 3, 28, 9, 0));
        assert_eq!(next, Some(at(2024, 3, 31, 18, 0)));
    }

    #[test]
    fn test_same_day_before_and_after_time() {
        let schedule = sunday_six_pm();
        assert_eq!(
            schedule.next_after(at(2024, 3, 31, 17, 59)),
            Some(at(2024, 3, 31, 18, 0))
        );
        assert_eq!(
            schedule.next_after(at(2024, 3, 31, 18, 0)),
            Some(at(2024, 4, 7, 18, 0))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(sunday_six_pm().describe(), "every Sun at 18:00");
        assert_eq!(ReminderSchedule::default().describe(), "disabled");
    }

    #[test]
    fn test_serde_round_trip() {
        let schedule = sunday_six_pm();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: ReminderSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
