use crate::label::{normalize, LabelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recurring maintenance jobs tracked by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    WaterChange,
    FilterClean,
    FullClean,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::WaterChange, TaskKind::FilterClean, TaskKind::FullClean];

    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::WaterChange => "water-change",
            TaskKind::FilterClean => "filter-clean",
            TaskKind::FullClean => "full-clean",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskKind::WaterChange => "Water change",
            TaskKind::FilterClean => "Filter cleaning",
            TaskKind::FullClean => "Full tank cleaning",
        }
    }

    /// Days added to "today" when the task is marked complete.
    pub fn default_interval_days(&self) -> u32 {
        match self {
            TaskKind::WaterChange => 7,
            TaskKind::FilterClean => 14,
            TaskKind::FullClean => 30,
        }
    }

    /// Offset from session start of the first due date. The filter's first
    /// cleaning comes after one week even though its interval is two.
    pub fn default_first_due_in_days(&self) -> u32 {
        match self {
            TaskKind::WaterChange => 0,
            TaskKind::FilterClean => 7,
            TaskKind::FullClean => 30,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskKind {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "water-change" | "water" => Ok(TaskKind::WaterChange),
            "filter-clean" | "filter" => Ok(TaskKind::FilterClean),
            "full-clean" | "tank-clean" | "tank" => Ok(TaskKind::FullClean),
            _ => Err(LabelError::UnknownTask(s.to_string())),
        }
    }
}
