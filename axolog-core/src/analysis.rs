//! Derived views over the care log: status cards, health summary and
//! feeding statistics.

use crate::evaluator::{ParameterEvaluator, Tier};
use axolog_schemas::{FeedingType, Observation, ParameterKind, Range};
use serde::Serialize;
use std::collections::HashMap;

/// Number of entries shown in the recent feeding and health tables.
pub const RECENT_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterStatus {
    pub kind: ParameterKind,
    pub value: f64,
    pub ideal: Range,
    pub tier: Tier,
}

/// One status card per parameter for the given entry, in display order.
pub fn parameter_statuses(observation: &Observation, evaluator: &ParameterEvaluator) -> Vec<ParameterStatus> {
    ParameterKind::ALL
        .iter()
        .map(|&kind| {
            let value = observation.value(kind);
            ParameterStatus {
                kind,
                value,
                ideal: evaluator.ideal_range(kind),
                tier: evaluator.evaluate(kind, value),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Attention,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "Good",
            HealthStatus::Attention => "Attention",
        }
    }
}

/// `Good` as soon as any entry ever noted an active animal or a good
/// appetite, `Attention` otherwise. `None` when nothing has been logged.
pub fn health_summary(records: &[Observation]) -> Option<HealthStatus> {
    if records.is_empty() {
        return None;
    }
    let thriving = records
        .iter()
        .any(|r| r.health.tags().iter().any(|t| t.is_positive()));
    Some(if thriving {
        HealthStatus::Good
    } else {
        HealthStatus::Attention
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedingCount {
    pub feeding: FeedingType,
    pub count: usize,
}

/// How often each food was given, most frequent first. Ties keep the
/// enumeration order; foods never given are left out.
pub fn feeding_distribution(records: &[Observation]) -> Vec<FeedingCount> {
    let mut counts: HashMap<FeedingType, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.feeding).or_insert(0) += 1;
    }

    let mut distribution: Vec<FeedingCount> = FeedingType::ALL
        .iter()
        .filter_map(|&feeding| {
            counts
                .get(&feeding)
                .map(|&count| FeedingCount { feeding, count })
        })
        .collect();
    // stable sort keeps enumeration order for equal counts
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}
