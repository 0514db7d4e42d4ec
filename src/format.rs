//! Output formatting for command results and reports.

use crate::child::Child;
use crate::codec::timestamp::format_display;
use crate::store::{LoadReport, Record, Store};
use crate::types::{Achievement, Task, Wish};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}', expected text or json", other)),
        }
    }
}

/// Format a task as a single summary line.
pub fn task_line(task: &Task) -> String {
    format!(
        "Task[ID: {}, Title: {}, Category: {}, Priority: {}, Assigned by: {}, Points: {}, Status: {}]",
        task.id,
        task.title,
        task.category.display_name(),
        task.priority.display_name(),
        task.assigned_by,
        task.points,
        if task.completed { "Completed" } else { "Pending" }
    )
}

/// Format a wish as a single summary line.
pub fn wish_line(wish: &Wish) -> String {
    let mut line = format!(
        "Wish[ID: {}, Title: {}, Status: {}",
        wish.id,
        wish.title,
        if wish.approved { "Approved" } else { "Pending" }
    );
    if wish.approved {
        line.push_str(&format!(", Required Level: {}", wish.required_level));
    }
    if let Some(window) = &wish.window {
        line.push_str(&format!(
            ", Time: {} to {}",
            format_display(&window.start),
            format_display(&window.end)
        ));
    }
    line.push(']');
    line
}

pub fn achievement_line(achievement: &Achievement) -> String {
    format!(
        "{}: {} - {} [{}]",
        achievement.name,
        achievement.description,
        if achievement.unlocked { "Unlocked" } else { "Locked" },
        achievement.kind.display_name()
    )
}

pub fn child_status(child: &Child) -> String {
    format!(
        "Child[Points: {}, Level: {}, Average Rating: {:.2}, Completed Tasks: {}, Approved Wishes: {}]",
        child.points,
        child.level(),
        child.average_rating(),
        child.completed_tasks,
        child.approved_wishes
    )
}

/// Full achievement listing: unlocked first, then locked.
pub fn achievements_report(all: &[Achievement]) -> String {
    let unlocked: Vec<&Achievement> = all.iter().filter(|a| a.unlocked).collect();
    let locked: Vec<&Achievement> = all.iter().filter(|a| !a.unlocked).collect();

    let mut out = String::from("===== ACHIEVEMENTS =====\n");
    out.push_str(&format!(
        "\nUnlocked Achievements ({}/{}):\n",
        unlocked.len(),
        all.len()
    ));
    if unlocked.is_empty() {
        out.push_str("No achievements unlocked yet.\n");
    }
    for achievement in &unlocked {
        out.push_str(&format!("- {}\n", achievement_line(achievement)));
    }

    out.push_str("\nLocked Achievements:\n");
    if locked.is_empty() {
        out.push_str("All achievements unlocked! Congratulations!\n");
    }
    for achievement in &locked {
        out.push_str(&format!("- {}\n", achievement_line(achievement)));
    }
    out.push_str("=======================");
    out
}

/// Combined task and wish reminder listing.
pub fn reminders_report(task_reminders: &[String], wish_reminders: &[String]) -> String {
    let mut out = String::from("===== REMINDERS =====\n");
    if task_reminders.is_empty() && wish_reminders.is_empty() {
        out.push_str("No upcoming reminders.");
        return out;
    }
    if !task_reminders.is_empty() {
        out.push_str("\nTask Reminders:\n");
        for reminder in task_reminders {
            out.push_str(&format!("- {}\n", reminder));
        }
    }
    if !wish_reminders.is_empty() {
        out.push_str("\nWish Reminders:\n");
        for reminder in wish_reminders {
            out.push_str(&format!("- {}\n", reminder));
        }
    }
    out.push_str("=====================");
    out
}

/// Load summary of one store, as printed by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    pub kind: &'static str,
    pub path: PathBuf,
    pub records: usize,
    #[serde(flatten)]
    pub report: LoadReport,
}

impl StoreSummary {
    pub fn of<R: Record>(store: &Store<R>) -> Self {
        Self {
            kind: R::KIND,
            path: store.path().to_path_buf(),
            records: store.len(),
            report: store.load_report().clone(),
        }
    }
}

/// Render store load summaries in the requested format.
pub fn check_report(summaries: &[StoreSummary], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(summaries).unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string() }).to_string()
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            for summary in summaries {
                out.push_str(&format!(
                    "{} store ({}): {} records, {} lines loaded, {} skipped{}\n",
                    summary.kind,
                    summary.path.display(),
                    summary.records,
                    summary.report.loaded,
                    summary.report.skipped.len(),
                    if summary.report.created { ", file created" } else { "" }
                ));
                for skipped in &summary.report.skipped {
                    out.push_str(&format!("  line {}: {}\n", skipped.line, skipped.reason));
                }
            }
            out
        }
    }
}
