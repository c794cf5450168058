use crate::{
    observation::{FeedingType, HealthObservations},
    task::TaskKind,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single user action against the running session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Raw form values; the session clamps them before storing.
    SaveEntry {
        temperature: f64,
        ph: f64,
        ammonia: f64,
        nitrite: f64,
        feeding: FeedingType,
        #[serde(default)]
        health: HealthObservations,
    },
    CompleteTask {
        task: TaskKind,
    },
    Export {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}
