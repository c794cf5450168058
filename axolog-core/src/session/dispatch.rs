use super::state::Session;
use crate::{error::AxologError, export};
use axolog_schemas::{Command, HealthObservations, Observation, ParameterKind, TaskKind};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a command changed. The caller re-queries the session to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    EntrySaved { index: usize },
    TaskRescheduled { task: TaskKind, next_due: NaiveDate },
    Exported { path: PathBuf, rows: usize },
}

impl Session {
    /// Runs one command to completion against this session.
    ///
    /// Saving cannot fail. Rescheduling fails only when the new due date
    /// would overflow the calendar, and an export when the target file cannot
    /// be written.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> Result<Outcome, AxologError> {
        match command {
            Command::SaveEntry {
                temperature,
                ph,
                ammonia,
                nitrite,
                feeding,
                health,
            } => {
                let record = Observation {
                    date: today,
                    temperature: clamp_input(ParameterKind::Temperature, temperature),
                    ph: clamp_input(ParameterKind::Ph, ph),
                    ammonia: clamp_input(ParameterKind::Ammonia, ammonia),
                    nitrite: clamp_input(ParameterKind::Nitrite, nitrite),
                    feeding,
                    health: HealthObservations::new(health.tags().iter().copied()),
                };
                self.append_observation(record);
                let index = self.store.len() - 1;
                info!(index, %today, "entry saved");
                Ok(Outcome::EntrySaved { index })
            }
            Command::CompleteTask { task } => {
                let next_due = self.mark_task_complete(task, today)?;
                info!(task = %task, %next_due, "task marked complete");
                Ok(Outcome::TaskRescheduled { task, next_due })
            }
            Command::Export { path } => {
                let path = path.unwrap_or_else(|| PathBuf::from(export::DEFAULT_EXPORT_FILE));
                let rows = self.export_to(&path)?;
                Ok(Outcome::Exported { path, rows })
            }
        }
    }

    pub fn export_to(&self, path: &Path) -> Result<usize, AxologError> {
        let rows = export::export_to_path(self.store.all(), path)?;
        info!(path = %path.display(), rows, "care log exported");
        Ok(rows)
    }
}

fn clamp_input(kind: ParameterKind, raw: f64) -> f64 {
    let value = kind.clamp_to_valid(raw);
    if value != raw {
        debug!(parameter = %kind, raw, clamped = value, "input clamped to valid range");
    }
    value
}
