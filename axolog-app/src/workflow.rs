use crate::{plotting, report};
use anyhow::{Context, Result};
use axolog_core::{export::DEFAULT_EXPORT_FILE, Outcome, Session, SessionBuilder};
use axolog_schemas::{file_formats::SessionScriptFile, CareProfile, Command};
use chrono::NaiveDate;
use std::{fs, path::Path};

/// Result of replaying a script: the final session and the date of its last step.
pub struct ReplayOutput {
    pub session: Session,
    pub today: NaiveDate,
    pub outcomes: Vec<Outcome>,
}

/// Runs every scripted command, in order, against a fresh session.
///
/// Exports without a path, or with a relative one, are written inside
/// `output_dir`.
pub fn replay_script(
    profile: CareProfile,
    script: SessionScriptFile,
    output_dir: &Path,
    fallback_start: NaiveDate,
) -> Result<ReplayOutput> {
    println!("\n--- [Replay] Starting session ---");

    let start = script
        .start_date
        .or_else(|| script.steps.iter().find_map(|s| s.date))
        .unwrap_or(fallback_start);

    let mut session = SessionBuilder::new()
        .with_profile(profile)
        .starting_on(start)
        .build()?;

    let mut today = start;
    let mut outcomes = Vec::with_capacity(script.steps.len());

    for (i, step) in script.steps.into_iter().enumerate() {
        if let Some(date) = step.date {
            today = date;
        }
        let command = match step.command {
            Command::Export { path } => {
                let target = match path {
                    Some(p) if p.is_absolute() => p,
                    Some(p) => output_dir.join(p),
                    None => output_dir.join(DEFAULT_EXPORT_FILE),
                };
                Command::Export { path: Some(target) }
            }
            other => other,
        };

        let outcome = session
            .execute(command, today)
            .with_context(|| format!("Step {} of the session script failed", i + 1))?;
        println!("[Replay] {} {}", today, describe(&outcome));
        outcomes.push(outcome);
    }

    Ok(ReplayOutput {
        session,
        today,
        outcomes,
    })
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::EntrySaved { index } => format!("entry #{} saved", index + 1),
        Outcome::TaskRescheduled { task, next_due } => {
            format!("{} done, next due {}", task, next_due)
        }
        Outcome::Exported { path, rows } => format!("exported {} entries to {:?}", rows, path),
    }
}

/// Prints the dashboard, then writes the CSV export, the charts and (when
/// asked) the JSON report into `output_dir`.
pub fn write_reports(output: &ReplayOutput, output_dir: &Path, json: bool) -> Result<()> {
    println!("[Replay] {} steps replayed.", output.outcomes.len());
    println!("\n--- [Replay] Dashboard ---");
    let dashboard = report::DashboardReport::build(&output.session, output.today);
    print!("{}", report::render_dashboard(&dashboard));

    let csv_path = output_dir.join(DEFAULT_EXPORT_FILE);
    let rows = output
        .session
        .export_to(&csv_path)
        .with_context(|| format!("Failed to export care log to {:?}", csv_path))?;
    println!("[Export] {} entries written to '{}'.", rows, csv_path.display());

    plotting::generate_all_plots(output_dir, output.session.all_observations())?;

    if json {
        let json_path = output_dir.join("report.json");
        fs::write(&json_path, serde_json::to_string_pretty(&dashboard)?)
            .with_context(|| format!("Failed to write {:?}", json_path))?;
        println!("[Report] JSON report written to '{}'.", json_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axolog_core::DueTier;
    use axolog_schemas::TaskKind;

    const SCRIPT: &str = r#"
schema_version: "1"
steps:
  - type: save_entry
    date: 2024-01-03
    temperature: 18.0
    ph: 7.4
    ammonia: 0.0
    nitrite: 0.0
    feeding: pellets
    health: [active]
  - type: save_entry
    temperature: 20.5
    ph: 7.9
    ammonia: 0.05
    nitrite: 0.0
    feeding: earthworms
  - type: complete_task
    date: 2024-01-10
    task: water-change
  - type: export
"#;

    #[test]
    fn replays_steps_with_inherited_dates() {
        let dir = tempfile::tempdir().unwrap();
        let script: SessionScriptFile = serde_yaml::from_str(SCRIPT).unwrap();
        let fallback = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        let output = replay_script(CareProfile::default(), script, dir.path(), fallback).unwrap();

        let session = &output.session;
        assert_eq!(session.started_on(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(output.today, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(session.all_observations()[1].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(
            session.next_due(TaskKind::WaterChange),
            NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()
        );
        assert_eq!(session.reminders(output.today)[0].tier, DueTier::Upcoming);

        assert_eq!(
            output.outcomes.last(),
            Some(&Outcome::Exported {
                path: dir.path().join(DEFAULT_EXPORT_FILE),
                rows: 2,
            })
        );
        let csv = fs::read_to_string(dir.path().join(DEFAULT_EXPORT_FILE)).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }
}
