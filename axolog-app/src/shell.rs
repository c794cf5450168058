//! Interactive session: one line of input is one command.

use crate::{plotting, report};
use anyhow::Result;
use axolog_core::{analysis::RECENT_ENTRIES, Outcome, Session};
use axolog_schemas::{Command, FeedingType, HealthObservations, TaskKind};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Where "today" comes from for each command.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Save a new entry (defaults match a healthy tank)
    Add {
        #[arg(long = "temp", default_value_t = 18.0)]
        temperature: f64,
        #[arg(long, default_value_t = 7.4)]
        ph: f64,
        #[arg(long = "nh3", default_value_t = 0.0)]
        ammonia: f64,
        #[arg(long = "no2", default_value_t = 0.0)]
        nitrite: f64,
        #[arg(long, default_value = "earthworms")]
        feeding: FeedingType,
        /// Comma-separated health observations, e.g. active,good-appetite
        #[arg(long, value_parser = HealthObservations::parse_list)]
        health: Option<HealthObservations>,
    },
    /// Show the water parameter cards for the latest entry
    Status,
    /// Show the maintenance planner
    Tasks,
    /// Mark a maintenance task as done
    Done { task: TaskKind },
    /// Show the most recent feedings and health notes
    History {
        #[arg(short = 'n', long, default_value_t = RECENT_ENTRIES)]
        count: usize,
    },
    /// Show the feeding distribution and health status
    Feeding,
    /// Export the care log as CSV
    Export { path: Option<PathBuf> },
    /// Render charts into a directory
    Plot {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Show the care tips
    Tips,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Reads commands from `input` until end of input or `quit`. Input errors are
/// reported to `out` and the session carries on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, clock: Clock, input: R, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "🧪 {} care log. Type `help` for commands, `quit` to leave.",
        session.profile().pet_name
    )?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(out, "{}", err)?;
                continue;
            }
        };

        if !handle(session, clock.today(), parsed.command, out)? {
            break;
        }
    }
    Ok(())
}

/// Returns `false` once the user asked to leave.
fn handle<W: Write>(session: &mut Session, today: NaiveDate, command: ShellCommand, out: &mut W) -> Result<bool> {
    match command {
        ShellCommand::Add {
            temperature,
            ph,
            ammonia,
            nitrite,
            feeding,
            health,
        } => {
            let command = Command::SaveEntry {
                temperature,
                ph,
                ammonia,
                nitrite,
                feeding,
                health: health.unwrap_or_default(),
            };
            dispatch(session, command, today, out)?;
            write!(out, "{}", report::render_statuses(session.latest_statuses().as_deref()))?;
        }
        ShellCommand::Status => {
            write!(out, "{}", report::render_statuses(session.latest_statuses().as_deref()))?;
        }
        ShellCommand::Tasks => {
            write!(out, "{}", report::render_reminders(&session.reminders(today)))?;
        }
        ShellCommand::Done { task } => {
            dispatch(session, Command::CompleteTask { task }, today, out)?;
        }
        ShellCommand::History { count } => {
            write!(out, "{}", report::render_recent(session.recent(count)))?;
        }
        ShellCommand::Feeding => {
            write!(
                out,
                "{}",
                report::render_feeding(&session.feeding_distribution(), session.health_summary())
            )?;
        }
        ShellCommand::Export { path } => {
            dispatch(session, Command::Export { path }, today, out)?;
        }
        ShellCommand::Plot { dir } => {
            if let Err(err) = plotting::generate_all_plots(&dir, session.all_observations()) {
                writeln!(out, "Could not render charts: {:#}", err)?;
            }
        }
        ShellCommand::Tips => {
            write!(out, "{}", report::render_tips(session.profile()))?;
        }
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn dispatch<W: Write>(session: &mut Session, command: Command, today: NaiveDate, out: &mut W) -> Result<()> {
    match session.execute(command, today) {
        Ok(Outcome::EntrySaved { index }) => writeln!(out, "Entry #{} saved!", index + 1)?,
        Ok(Outcome::TaskRescheduled { task, next_due }) => writeln!(
            out,
            "{} done. Next due on {}.",
            task.title(),
            next_due.format("%d.%m.%Y")
        )?,
        Ok(Outcome::Exported { path, rows }) => {
            writeln!(out, "Exported {} entries to '{}'.", rows, path.display())?
        }
        Err(err) => writeln!(out, "Error: {}", err)?,
    }
    Ok(())
}
