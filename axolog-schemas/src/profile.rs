use crate::{parameter::ParameterKind, parameter::Range, task::TaskKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealRanges {
    pub temperature: Range,
    pub ph: Range,
    pub ammonia: Range,
    pub nitrite: Range,
}

impl IdealRanges {
    pub fn get(&self, kind: ParameterKind) -> Range {
        match kind {
            ParameterKind::Temperature => self.temperature,
            ParameterKind::Ph => self.ph,
            ParameterKind::Ammonia => self.ammonia,
            ParameterKind::Nitrite => self.nitrite,
        }
    }
}

impl Default for IdealRanges {
    fn default() -> Self {
        Self {
            temperature: ParameterKind::Temperature.default_ideal_range(),
            ph: ParameterKind::Ph.default_ideal_range(),
            ammonia: ParameterKind::Ammonia.default_ideal_range(),
            nitrite: ParameterKind::Nitrite.default_ideal_range(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSettings {
    pub interval_days: u32,
    pub first_due_in_days: u32,
}

impl TaskSettings {
    fn defaults_for(kind: TaskKind) -> Self {
        Self {
            interval_days: kind.default_interval_days(),
            first_due_in_days: kind.default_first_due_in_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPlan {
    pub water_change: TaskSettings,
    pub filter_clean: TaskSettings,
    pub full_clean: TaskSettings,
}

impl TaskPlan {
    pub fn get(&self, kind: TaskKind) -> TaskSettings {
        match kind {
            TaskKind::WaterChange => self.water_change,
            TaskKind::FilterClean => self.filter_clean,
            TaskKind::FullClean => self.full_clean,
        }
    }
}

impl Default for TaskPlan {
    fn default() -> Self {
        Self {
            water_change: TaskSettings::defaults_for(TaskKind::WaterChange),
            filter_clean: TaskSettings::defaults_for(TaskKind::FilterClean),
            full_clean: TaskSettings::defaults_for(TaskKind::FullClean),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Everything a session needs to know about how to judge readings and
/// schedule maintenance. Every field has a built-in default, so a profile
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareProfile {
    pub pet_name: String,
    pub ideal_ranges: IdealRanges,
    /// Temperatures above this are dangerous. Sits between the ideal ceiling
    /// (18 °C) and the "never above" figure quoted in the care tips (22 °C).
    pub temperature_danger_above: f64,
    pub urgent_within_days: i64,
    pub tasks: TaskPlan,
    pub care_tips: Vec<TipSection>,
}

impl Default for CareProfile {
    fn default() -> Self {
        Self {
            pet_name: "Axolotl".to_string(),
            ideal_ranges: IdealRanges::default(),
            temperature_danger_above: 20.0,
            urgent_within_days: 3,
            tasks: TaskPlan::default(),
            care_tips: default_care_tips(),
        }
    }
}

fn section(title: &str, items: &[&str]) -> TipSection {
    TipSection {
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_care_tips() -> Vec<TipSection> {
    vec![
        section(
            "Care tips",
            &[
                "Temperature: 16-18 °C (never above 22 °C!)",
                "pH: 7.0-7.6",
                "No ammonia or nitrite is tolerable",
                "Change 25% of the water every week",
            ],
        ),
        section(
            "Warning signs",
            &[
                "Gills folded forward = stress",
                "Loss of appetite for more than 3 days",
                "White spots on the skin",
                "Bloated belly",
            ],
        ),
        section(
            "Food recommendations",
            &[
                "Earthworms (staple food)",
                "Special axolotl pellets",
                "Frozen bloodworms (treat)",
                "Small freshwater shrimp",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_keeps_remaining_defaults() {
        let yaml = r#"
pet_name: Wooper
urgent_within_days: 5
ideal_ranges:
  temperature: { min: 15.0, max: 19.0 }
tasks:
  water_change: { interval_days: 5, first_due_in_days: 1 }
"#;
        let profile: CareProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.pet_name, "Wooper");
        assert_eq!(profile.urgent_within_days, 5);
        assert_eq!(profile.ideal_ranges.temperature, Range::new(15.0, 19.0));
        assert_eq!(profile.ideal_ranges.ph, Range::new(7.0, 7.6));
        assert_eq!(profile.tasks.get(TaskKind::WaterChange).interval_days, 5);
        assert_eq!(profile.tasks.get(TaskKind::FullClean).interval_days, 30);
        assert_eq!(profile.temperature_danger_above, 20.0);
        assert_eq!(profile.care_tips.len(), 3);
    }
}
