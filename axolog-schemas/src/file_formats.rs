use crate::{command::Command, profile::CareProfile};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub schema_version: String,
    pub profile: CareProfile,
}

/// A recorded or hand-written list of actions to replay against a fresh session.
#[derive(Debug, Deserialize)]
pub struct SessionScriptFile {
    pub schema_version: String,
    /// Session start; defaults to the first dated step, else today.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub steps: Vec<ScriptStep>,
}

/// One scripted action. Undated steps reuse the date of the previous step.
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{observation::FeedingType, task::TaskKind};

    #[test]
    fn script_steps_flatten_the_command_tag() {
        let yaml = r#"
schema_version: "1"
start_date: 2024-01-01
steps:
  - type: save_entry
    date: 2024-01-02
    temperature: 18.0
    ph: 7.4
    ammonia: 0.0
    nitrite: 0.0
    feeding: pellets
    health: [active]
  - type: complete_task
    task: water-change
  - type: export
"#;
        let script: SessionScriptFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[0].date, NaiveDate::from_ymd_opt(2024, 1, 2));
        match &script.steps[0].command {
            Command::SaveEntry { feeding, health, .. } => {
                assert_eq!(*feeding, FeedingType::Pellets);
                assert_eq!(health.label(), "active");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(
            script.steps[1].command,
            Command::CompleteTask { task: TaskKind::WaterChange }
        );
        assert_eq!(script.steps[2].command, Command::Export { path: None });
    }
}
