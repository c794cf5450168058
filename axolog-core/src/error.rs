use axolog_schemas::{ParameterKind, TaskKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AxologError {
    #[error("Ideal range for {kind} is inverted: min {min} is above max {max}")]
    InvalidIdealRange { kind: ParameterKind, min: f64, max: f64 },

    #[error("Interval for task '{0}' must be at least one day")]
    ZeroInterval(TaskKind),

    #[error("Due date for task '{0}' falls past the last supported calendar day")]
    DueDateOutOfRange(TaskKind),

    #[error("Urgent window must not be negative (got {0} days)")]
    NegativeUrgentWindow(i64),

    #[error("Session start date is missing")]
    StartDateNotDefined,

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = AxologError::InvalidIdealRange {
            kind: ParameterKind::Ph,
            min: 7.6,
            max: 7.0,
        };
        assert_eq!(err.to_string(), "Ideal range for ph is inverted: min 7.6 is above max 7");

        let err = AxologError::ZeroInterval(TaskKind::FilterClean);
        assert_eq!(err.to_string(), "Interval for task 'filter-clean' must be at least one day");

        let err = AxologError::DueDateOutOfRange(TaskKind::FullClean);
        assert_eq!(
            err.to_string(),
            "Due date for task 'full-clean' falls past the last supported calendar day"
        );
    }
}
