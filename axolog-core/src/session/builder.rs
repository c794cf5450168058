use crate::{
    error::AxologError,
    evaluator::ParameterEvaluator,
    schedule::{due_after, TaskSchedule},
    session::state::Session,
    store::ReadingStore,
};
use axolog_schemas::{CareProfile, ParameterKind, TaskKind};
use chrono::NaiveDate;
use tracing::debug;

/// A fluent builder for constructing a `Session`.
///
/// The profile defaults to the built-in care profile; the start date has no
/// default because it seeds the maintenance schedule.
#[derive(Default)]
pub struct SessionBuilder {
    profile: Option<CareProfile>,
    start: Option<NaiveDate>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: CareProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Sets the day the session begins; first due dates count from here.
    pub fn starting_on(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Consumes the builder and returns an empty session.
    ///
    /// # Errors
    ///
    /// Returns an `AxologError` if no start date was given or the profile
    /// holds an inverted ideal range, a zero-day task interval, a task offset
    /// that runs off the calendar from the start date, or a negative urgent
    /// window.
    pub fn build(self) -> Result<Session, AxologError> {
        let started_on = self.start.ok_or(AxologError::StartDateNotDefined)?;
        let profile = self.profile.unwrap_or_default();
        validate_profile(&profile, started_on)?;

        debug!(pet = %profile.pet_name, %started_on, "starting care session");

        Ok(Session {
            evaluator: ParameterEvaluator::from_profile(&profile),
            schedule: TaskSchedule::from_plan(&profile.tasks, started_on)?,
            store: ReadingStore::new(),
            profile,
            started_on,
        })
    }
}

fn validate_profile(profile: &CareProfile, started_on: NaiveDate) -> Result<(), AxologError> {
    for kind in ParameterKind::ALL {
        let range = profile.ideal_ranges.get(kind);
        if range.min > range.max {
            return Err(AxologError::InvalidIdealRange {
                kind,
                min: range.min,
                max: range.max,
            });
        }
    }
    for kind in TaskKind::ALL {
        let settings = profile.tasks.get(kind);
        if settings.interval_days == 0 {
            return Err(AxologError::ZeroInterval(kind));
        }
        due_after(kind, started_on, settings.first_due_in_days)?;
        due_after(kind, started_on, settings.interval_days)?;
    }
    if profile.urgent_within_days < 0 {
        return Err(AxologError::NegativeUrgentWindow(profile.urgent_within_days));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axolog_schemas::Range;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn builds_with_default_profile() {
        let session = SessionBuilder::new().starting_on(start()).build().unwrap();
        assert_eq!(session.profile().pet_name, "Axolotl");
        assert!(session.latest_observation().is_none());
        assert_eq!(session.started_on(), start());
    }

    #[test]
    fn requires_start_date() {
        let err = SessionBuilder::new().build().unwrap_err();
        assert!(matches!(err, AxologError::StartDateNotDefined));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut profile = CareProfile::default();
        profile.ideal_ranges.ph = Range::new(7.6, 7.0);
        let err = SessionBuilder::new()
            .with_profile(profile)
            .starting_on(start())
            .build()
            .unwrap_err();
        assert!(matches!(err, AxologError::InvalidIdealRange { kind: ParameterKind::Ph, .. }));
    }

    #[test]
    fn rejects_zero_interval() {
        let mut profile = CareProfile::default();
        profile.tasks.full_clean.interval_days = 0;
        let err = SessionBuilder::new()
            .with_profile(profile)
            .starting_on(start())
            .build()
            .unwrap_err();
        assert!(matches!(err, AxologError::ZeroInterval(TaskKind::FullClean)));
    }

    #[test]
    fn rejects_offsets_that_run_off_the_calendar() {
        let mut profile = CareProfile::default();
        profile.tasks.full_clean.first_due_in_days = u32::MAX;
        let err = SessionBuilder::new()
            .with_profile(profile)
            .starting_on(start())
            .build()
            .unwrap_err();
        assert!(matches!(err, AxologError::DueDateOutOfRange(TaskKind::FullClean)));

        let mut profile = CareProfile::default();
        profile.tasks.water_change.interval_days = u32::MAX;
        let err = SessionBuilder::new()
            .with_profile(profile)
            .starting_on(start())
            .build()
            .unwrap_err();
        assert!(matches!(err, AxologError::DueDateOutOfRange(TaskKind::WaterChange)));
    }
}
