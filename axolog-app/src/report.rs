//! Text rendering of the dashboard: status cards, reminder cards, recent
//! entries and the care tips.

use axolog_core::{
    analysis::{FeedingCount, HealthStatus, ParameterStatus, RECENT_ENTRIES},
    DueTier, Reminder, Session,
};
use axolog_schemas::{CareProfile, Observation, ParameterKind, TaskKind};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

const NO_DATA: &str = "⏳ No data collected yet. Start by saving an entry with `add`.";

/// Everything the dashboard shows for one day, in a serializable form.
///
/// Built once per render: constructing it computes the reminders, which logs
/// a warning for every overdue task.
#[derive(Debug, Serialize)]
pub struct DashboardReport<'a> {
    pub pet_name: &'a str,
    pub today: NaiveDate,
    pub entries: usize,
    pub latest: Option<&'a Observation>,
    pub recent: &'a [Observation],
    pub statuses: Option<Vec<ParameterStatus>>,
    pub health: Option<HealthStatus>,
    pub feeding: Vec<FeedingCount>,
    pub reminders: Vec<Reminder>,
}

impl<'a> DashboardReport<'a> {
    pub fn build(session: &'a Session, today: NaiveDate) -> Self {
        Self {
            pet_name: &session.profile().pet_name,
            today,
            entries: session.all_observations().len(),
            latest: session.latest_observation(),
            recent: session.recent(RECENT_ENTRIES),
            statuses: session.latest_statuses(),
            health: session.health_summary(),
            feeding: session.feeding_distribution(),
            reminders: session.reminders(today),
        }
    }
}

fn parameter_icon(kind: ParameterKind) -> &'static str {
    match kind {
        ParameterKind::Temperature => "🌡️",
        ParameterKind::Ph => "🧪",
        ParameterKind::Ammonia => "☠️",
        ParameterKind::Nitrite => "⚠️",
    }
}

fn task_icon(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::WaterChange => "💧",
        TaskKind::FilterClean => "🧽",
        TaskKind::FullClean => "🧼",
    }
}

pub fn render_statuses(statuses: Option<&[ParameterStatus]>) -> String {
    let Some(statuses) = statuses else {
        return format!("{}\n", NO_DATA);
    };
    let mut out = String::new();
    for status in statuses {
        let unit = status.kind.unit();
        let value = if unit.is_empty() {
            format!("{}", status.value)
        } else {
            format!("{} {}", status.value, unit)
        };
        let _ = writeln!(
            out,
            "{} {:<5} {:>10}   Ideal: {:<9} {} {}",
            parameter_icon(status.kind),
            status.kind.column().to_uppercase(),
            value,
            status.ideal.to_string(),
            status.tier.icon(),
            status.tier
        );
    }
    out
}

pub fn render_reminders(reminders: &[Reminder]) -> String {
    let mut out = String::new();
    for reminder in reminders {
        let status = match reminder.tier {
            DueTier::Done => format!("✅ {}", reminder.status_text()),
            DueTier::Urgent => format!("⏳ {} (soon)", reminder.status_text()),
            DueTier::Upcoming => format!("⏳ {}", reminder.status_text()),
        };
        let _ = writeln!(
            out,
            "{} {:<19} due {}   {}",
            task_icon(reminder.task),
            reminder.task.title(),
            reminder.due.format("%d.%m.%Y"),
            status
        );
    }
    out
}

pub fn render_recent(records: &[Observation]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_DATA);
    }
    let mut out = String::from("date        feeding         health\n");
    for record in records {
        let health = record.health.label();
        let _ = writeln!(
            out,
            "{}  {:<14}  {}",
            record.date,
            record.feeding.label(),
            if health.is_empty() { "-" } else { health.as_str() }
        );
    }
    out
}

pub fn render_feeding(distribution: &[FeedingCount], health: Option<HealthStatus>) -> String {
    if distribution.is_empty() {
        return format!("{}\n", NO_DATA);
    }
    let total: usize = distribution.iter().map(|c| c.count).sum();
    let mut out = String::new();
    for count in distribution {
        let share = count.count as f64 / total as f64 * 100.0;
        let _ = writeln!(out, "🥗 {:<14} {:>3}x  {:>5.1}%", count.feeding.label(), count.count, share);
    }
    if let Some(health) = health {
        let _ = writeln!(out, "Health status: {}", health.label());
    }
    out
}

pub fn render_tips(profile: &CareProfile) -> String {
    let mut out = String::new();
    for section in &profile.care_tips {
        let _ = writeln!(out, "{}:", section.title);
        for item in &section.items {
            let _ = writeln!(out, "  - {}", item);
        }
    }
    let _ = writeln!(
        out,
        "Note: readings are flagged dangerous above {} °C; the ideal ceiling is {} °C.",
        profile.temperature_danger_above, profile.ideal_ranges.temperature.max
    );
    out
}

/// The full dashboard as printed at the end of a replay.
pub fn render_dashboard(report: &DashboardReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "========================================");
    let _ = writeln!(out, "{} care log, {} ({} entries)", report.pet_name, report.today, report.entries);
    let _ = writeln!(out, "----------------------------------------");
    let _ = writeln!(out, "Water parameters (latest entry):");
    out.push_str(&render_statuses(report.statuses.as_deref()));
    let _ = writeln!(out, "\nRecent feedings & health:");
    out.push_str(&render_recent(report.recent));
    let _ = writeln!(out, "\nFeeding distribution:");
    out.push_str(&render_feeding(&report.feeding, report.health));
    let _ = writeln!(out, "\nCare planner:");
    out.push_str(&render_reminders(&report.reminders));
    let _ = writeln!(out, "========================================");
    out
}
