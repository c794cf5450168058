use crate::error::AxologError;
use axolog_schemas::{profile::TaskPlan, TaskKind};
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    pub kind: TaskKind,
    pub next_due: NaiveDate,
    pub interval_days: u32,
}

/// One live due date per task kind, indexed in `TaskKind::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSchedule {
    tasks: [ScheduledTask; 3],
}

impl TaskSchedule {
    /// Seeds every task with its first due date counted from `start`.
    pub fn from_plan(plan: &TaskPlan, start: NaiveDate) -> Result<Self, AxologError> {
        let seed = |kind: TaskKind| -> Result<ScheduledTask, AxologError> {
            let settings = plan.get(kind);
            Ok(ScheduledTask {
                kind,
                next_due: due_after(kind, start, settings.first_due_in_days)?,
                interval_days: settings.interval_days,
            })
        };
        Ok(Self {
            tasks: [
                seed(TaskKind::WaterChange)?,
                seed(TaskKind::FilterClean)?,
                seed(TaskKind::FullClean)?,
            ],
        })
    }

    pub fn get(&self, kind: TaskKind) -> &ScheduledTask {
        &self.tasks[kind as usize]
    }

    pub fn next_due(&self, kind: TaskKind) -> NaiveDate {
        self.get(kind).next_due
    }

    /// Replaces the due date of `kind` with `today + interval`. The old due
    /// date plays no part, so missed cycles never pile up.
    ///
    /// Fails without touching the schedule when the new date would fall past
    /// the last representable calendar day.
    pub fn mark_complete(&mut self, kind: TaskKind, today: NaiveDate) -> Result<NaiveDate, AxologError> {
        let task = &mut self.tasks[kind as usize];
        task.next_due = due_after(kind, today, task.interval_days)?;
        Ok(task.next_due)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter()
    }
}

/// `from + days`, or `DueDateOutOfRange` when the sum overflows the calendar.
pub fn due_after(kind: TaskKind, from: NaiveDate, days: u32) -> Result<NaiveDate, AxologError> {
    from.checked_add_days(Days::new(u64::from(days)))
        .ok_or(AxologError::DueDateOutOfRange(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seeds_first_due_dates_from_start() {
        let schedule = TaskSchedule::from_plan(&TaskPlan::default(), date(2024, 1, 1)).unwrap();
        assert_eq!(schedule.next_due(TaskKind::WaterChange), date(2024, 1, 1));
        assert_eq!(schedule.next_due(TaskKind::FilterClean), date(2024, 1, 8));
        assert_eq!(schedule.next_due(TaskKind::FullClean), date(2024, 1, 31));
    }

    #[test]
    fn completion_counts_from_today_and_touches_one_task() {
        let mut schedule = TaskSchedule::from_plan(&TaskPlan::default(), date(2024, 1, 1)).unwrap();

        assert_eq!(schedule.mark_complete(TaskKind::WaterChange, date(2024, 1, 10)).unwrap(), date(2024, 1, 17));
        assert_eq!(schedule.mark_complete(TaskKind::WaterChange, date(2024, 1, 10)).unwrap(), date(2024, 1, 17));
        assert_eq!(schedule.next_due(TaskKind::FilterClean), date(2024, 1, 8));
        assert_eq!(schedule.next_due(TaskKind::FullClean), date(2024, 1, 31));

        assert_eq!(schedule.mark_complete(TaskKind::FullClean, date(2024, 2, 15)).unwrap(), date(2024, 3, 16));
    }

    #[test]
    fn iterates_in_fixed_order() {
        let schedule = TaskSchedule::from_plan(&TaskPlan::default(), date(2024, 1, 1)).unwrap();
        let kinds: Vec<TaskKind> = schedule.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, TaskKind::ALL.to_vec());
    }

    #[test]
    fn first_due_past_the_calendar_is_an_error() {
        let mut plan = TaskPlan::default();
        plan.full_clean.first_due_in_days = u32::MAX;
        let err = TaskSchedule::from_plan(&plan, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, AxologError::DueDateOutOfRange(TaskKind::FullClean)));
    }

    #[test]
    fn completion_near_the_last_day_leaves_schedule_untouched() {
        let mut schedule = TaskSchedule::from_plan(&TaskPlan::default(), date(2024, 1, 1)).unwrap();
        let err = schedule.mark_complete(TaskKind::WaterChange, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, AxologError::DueDateOutOfRange(TaskKind::WaterChange)));
        assert_eq!(schedule.next_due(TaskKind::WaterChange), date(2024, 1, 1));
    }
}
