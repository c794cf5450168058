use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod plotting;
mod report;
mod shell;
mod workflow;

use axolog_core::SessionBuilder;
use shell::Clock;

#[derive(Debug, Parser)]
#[command(name = "axolog", version, about = "Care log and maintenance planner for an axolotl tank")]
struct Cli {
    /// YAML care profile overriding ideal ranges, thresholds and task intervals
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Start an interactive session on stdin
    Shell,
    /// Replay a YAML session script and write the reports
    Replay {
        script: PathBuf,
        /// Output directory; defaults to a timestamped folder under ./data/runs
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write the dashboard as report.json
        #[arg(long)]
        json: bool,
    },
    /// Print the care tips
    Tips,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = config::load_profile(cli.config.as_deref())?;
    let clock = cli.today.map_or(Clock::System, Clock::Fixed);

    match cli.mode {
        Mode::Shell => {
            println!("--- Axolotl Care Log ---");
            let mut session = SessionBuilder::new()
                .with_profile(profile)
                .starting_on(clock.today())
                .build()?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut session, clock, stdin.lock(), &mut stdout)?;
        }
        Mode::Replay { script, out, json } => {
            println!("--- Axolotl Care Log ---");
            let session_script = config::load_script(&script)?;

            let output_dir = out.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "./data/runs/session_{}",
                    chrono::Local::now().format("%Y%m%d_%H%M%S")
                ))
            });
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

            // Keep the script next to its results for traceability
            if let Some(name) = script.file_name() {
                let copy_target = output_dir.join(name);
                if fs::canonicalize(&copy_target).ok() != fs::canonicalize(&script).ok() {
                    fs::copy(&script, &copy_target)
                        .with_context(|| format!("Failed to copy {:?} into the output directory", script))?;
                }
            }

            let output = workflow::replay_script(profile, session_script, &output_dir, clock.today())?;
            workflow::write_reports(&output, &output_dir, json)?;

            println!("\nReplay complete. Results are in '{}'", output_dir.display());
        }
        Mode::Tips => {
            print!("{}", report::render_tips(&profile));
        }
    }

    Ok(())
}
