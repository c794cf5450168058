//! Countdown to the next maintenance task.

use axolog_schemas::TaskKind;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Default number of days before the due date at which a task becomes urgent.
pub const URGENT_WITHIN_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueTier {
    /// Due date already passed. Shown as done, not as overdue.
    Done,
    Urgent,
    Upcoming,
}

impl fmt::Display for DueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DueTier::Done => "Done",
            DueTier::Urgent => "Urgent",
            DueTier::Upcoming => "Upcoming",
        };
        f.write_str(label)
    }
}

/// Whole days from `today` until `due`; negative once the date has passed.
pub fn days_until_due(today: NaiveDate, due: NaiveDate) -> i64 {
    (due - today).num_days()
}

pub fn due_tier(days_left: i64, urgent_within_days: i64) -> DueTier {
    if days_left < 0 {
        DueTier::Done
    } else if days_left <= urgent_within_days {
        DueTier::Urgent
    } else {
        DueTier::Upcoming
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub task: TaskKind,
    pub due: NaiveDate,
    pub days_left: i64,
    pub tier: DueTier,
}

impl Reminder {
    pub fn compute(task: TaskKind, due: NaiveDate, today: NaiveDate, urgent_within_days: i64) -> Self {
        let days_left = days_until_due(today, due);
        let tier = due_tier(days_left, urgent_within_days);
        if tier == DueTier::Done {
            warn!(
                task = %task,
                due = %due,
                days_overdue = -days_left,
                "task is past its due date but is displayed as done"
            );
        }
        Self { task, due, days_left, tier }
    }

    /// Card text: `Done` once the date has passed, otherwise `N days`.
    pub fn status_text(&self) -> String {
        match self.tier {
            DueTier::Done => "Done".to_string(),
            _ => format!("{} days", self.days_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_due_can_be_negative() {
        assert_eq!(days_until_due(date(2024, 1, 10), date(2024, 1, 7)), -3);
        assert_eq!(days_until_due(date(2024, 1, 10), date(2024, 1, 12)), 2);
        assert_eq!(days_until_due(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(due_tier(-1, URGENT_WITHIN_DAYS), DueTier::Done);
        assert_eq!(due_tier(0, URGENT_WITHIN_DAYS), DueTier::Urgent);
        assert_eq!(due_tier(3, URGENT_WITHIN_DAYS), DueTier::Urgent);
        assert_eq!(due_tier(4, URGENT_WITHIN_DAYS), DueTier::Upcoming);
    }

    #[test]
    fn status_text_hides_overdue_days() {
        let overdue = Reminder::compute(TaskKind::WaterChange, date(2024, 1, 7), date(2024, 1, 10), 3);
        assert_eq!(overdue.tier, DueTier::Done);
        assert_eq!(overdue.status_text(), "Done");

        let soon = Reminder::compute(TaskKind::FilterClean, date(2024, 1, 12), date(2024, 1, 10), 3);
        assert_eq!(soon.tier, DueTier::Urgent);
        assert_eq!(soon.status_text(), "2 days");
    }
}
