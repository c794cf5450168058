use crate::{
    analysis::{self, FeedingCount, HealthStatus, ParameterStatus},
    error::AxologError,
    evaluator::{ParameterEvaluator, Tier},
    reminder::Reminder,
    schedule::TaskSchedule,
    store::ReadingStore,
};
use axolog_schemas::{CareProfile, Observation, ParameterKind, TaskKind};
use chrono::NaiveDate;

/// All state of one running care session. Owned by whoever drives the
/// session and handed to each command handler by `&mut`.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) profile: CareProfile,
    pub(super) evaluator: ParameterEvaluator,
    pub(super) store: ReadingStore,
    pub(super) schedule: TaskSchedule,
    pub(super) started_on: NaiveDate,
}

impl Session {
    pub fn profile(&self) -> &CareProfile {
        &self.profile
    }

    pub fn started_on(&self) -> NaiveDate {
        self.started_on
    }

    pub fn schedule(&self) -> &TaskSchedule {
        &self.schedule
    }

    pub fn append_observation(&mut self, record: Observation) {
        self.store.append(record);
    }

    pub fn latest_observation(&self) -> Option<&Observation> {
        self.store.latest()
    }

    pub fn all_observations(&self) -> &[Observation] {
        self.store.all()
    }

    pub fn recent(&self, n: usize) -> &[Observation] {
        self.store.recent(n)
    }

    pub fn evaluate_parameter(&self, kind: ParameterKind, value: f64) -> Tier {
        self.evaluator.evaluate(kind, value)
    }

    /// Status cards for the most recent entry only; earlier entries are
    /// history and are not re-evaluated.
    pub fn latest_statuses(&self) -> Option<Vec<ParameterStatus>> {
        self.store
            .latest()
            .map(|latest| analysis::parameter_statuses(latest, &self.evaluator))
    }

    /// Reschedules `kind` to one interval after `today`. Only a `today` close
    /// to the end of the calendar can make this fail.
    pub fn mark_task_complete(&mut self, kind: TaskKind, today: NaiveDate) -> Result<NaiveDate, AxologError> {
        self.schedule.mark_complete(kind, today)
    }

    pub fn next_due(&self, kind: TaskKind) -> NaiveDate {
        self.schedule.next_due(kind)
    }

    pub fn reminders(&self, today: NaiveDate) -> Vec<Reminder> {
        self.schedule
            .iter()
            .map(|task| Reminder::compute(task.kind, task.next_due, today, self.profile.urgent_within_days))
            .collect()
    }

    pub fn health_summary(&self) -> Option<HealthStatus> {
        analysis::health_summary(self.store.all())
    }

    pub fn feeding_distribution(&self) -> Vec<FeedingCount> {
        analysis::feeding_distribution(self.store.all())
    }
}
