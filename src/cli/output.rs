use serde::Serialize;

use crate::model::clock::{ProgressState, TimeZoneReading};
use crate::model::config::Category;
use crate::model::dashboard::Dashboard;
use crate::model::task::{CategoryBucket, Task, checkbox_char};
use crate::ops::clock::format_time_short;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ZoneJson {
    pub label: String,
    pub offset: f64,
    pub time: String,
    pub primary: bool,
}

#[derive(Serialize)]
pub struct ProgressJson {
    pub index: u32,
    pub sections: u32,
    pub label: String,
}

#[derive(Serialize)]
pub struct ClockJson {
    pub date: String,
    pub zones: Vec<ZoneJson>,
    pub progress: ProgressJson,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn zone_to_json(zone: &TimeZoneReading) -> ZoneJson {
    ZoneJson {
        label: zone.label.clone(),
        offset: zone.offset_hours,
        time: format_time_short(&zone.local),
        primary: zone.primary,
    }
}

pub fn progress_to_json(progress: &ProgressState, sections: u32) -> ProgressJson {
    ProgressJson {
        index: progress.index,
        sections,
        label: progress.label.clone(),
    }
}

pub fn clock_to_json(dash: &Dashboard) -> ClockJson {
    ClockJson {
        date: dash.date.clone(),
        zones: dash.zones.iter().map(zone_to_json).collect(),
        progress: progress_to_json(&dash.progress, dash.day.sections),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `☑ name` / `☐ name`
pub fn format_task_line(name: &str, done: bool) -> String {
    format!("{} {}", checkbox_char(done), name)
}

/// A task and its subtasks, indented
pub fn format_task_tree(task: &Task) -> Vec<String> {
    let mut lines = vec![format!("  {}", format_task_line(&task.name, task.done))];
    for sub in &task.subtasks {
        lines.push(format!("    {}", format_task_line(&sub.name, sub.done)));
    }
    lines
}

/// Every category as a header followed by its tasks
pub fn format_bucket(bucket: &CategoryBucket, categories: &[Category]) -> Vec<String> {
    let mut lines = Vec::new();
    for category in categories {
        let tasks = bucket.tasks(&category.key);
        lines.push(format!("{} ({})", category.title, tasks.len()));
        if tasks.is_empty() {
            lines.push("  (no tasks)".to_string());
        }
        for task in tasks {
            lines.extend(format_task_tree(task));
        }
    }
    lines
}

/// Date, one line per zone (primary marked with `*`), and progress
pub fn format_clock(dash: &Dashboard) -> Vec<String> {
    let width = dash.zones.iter().map(|z| z.label.len()).max().unwrap_or(0);
    let mut lines = vec![dash.date.clone()];
    for zone in &dash.zones {
        let marker = if zone.primary { '*' } else { ' ' };
        lines.push(format!(
            "{} {:<width$}  {}",
            marker,
            zone.label,
            format_time_short(&zone.local),
            width = width
        ));
    }
    lines.push(format!(
        "{} [{}/{}]",
        dash.progress.label, dash.progress.index, dash.day.sections
    ));
    lines
}
