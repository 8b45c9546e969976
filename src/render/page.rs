use std::fmt::Write;

use crate::model::clock::TimeZoneReading;
use crate::model::dashboard::Dashboard;
use crate::ops::clock::{format_hour_label, format_time_short};
use crate::util::html::escape_html;

use super::progress::render_progress_bar;
use super::style::STYLESHEET;
use super::tasks::render_tasks;

/// Render the complete, self-contained dashboard document.
///
/// Output depends only on `dash`; the same input always yields the same bytes.
pub fn render_page(dash: &Dashboard) -> String {
    let weather = if dash.weather_location.is_empty() {
        escape_html(&dash.weather).into_owned()
    } else {
        format!(
            "{}: {}",
            escape_html(&dash.weather_location),
            escape_html(&dash.weather)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=800, height=480, initial-scale=1.0">
  <title>{title}</title>
  <style>{css}  </style>
</head>
<body>
  <div class="header">
    <div class="date">{date}</div>
    <div class="weather">{weather}</div>
  </div>

  <div class="timezone-row">
{zones}  </div>

  <div class="progress-section">
    <span class="time-labels">{day_start}</span>
    <span class="section-label">{section}</span>
    <div class="progress-bar">
{bar}    </div>
    <span class="time-labels">{day_end}</span>
  </div>

  <div class="columns">
{columns}  </div>

  <div class="updated">Updated: {updated}</div>
</body>
</html>
"#,
        title = escape_html(&dash.title),
        css = STYLESHEET,
        date = escape_html(&dash.date),
        weather = weather,
        zones = render_zones(&dash.zones),
        day_start = format_hour_label(dash.day.start),
        section = escape_html(&dash.progress.label),
        bar = render_progress_bar(dash.progress.index, dash.day.sections),
        day_end = format_hour_label(dash.day.end),
        columns = render_columns(dash),
        updated = format_time_short(&dash.primary.local),
    )
}

fn render_zones(zones: &[TimeZoneReading]) -> String {
    let mut html = String::new();
    for zone in zones {
        let class = if zone.primary { "tz tz-primary" } else { "tz" };
        let _ = write!(
            html,
            r#"    <div class="{class}">
      <div class="tz-label">{label}</div>
      <div class="tz-time">{time}</div>
    </div>
"#,
            label = escape_html(&zone.label.to_uppercase()),
            time = format_time_short(&zone.local),
        );
    }
    html
}

fn render_columns(dash: &Dashboard) -> String {
    let mut html = String::new();
    for category in &dash.categories {
        let _ = write!(
            html,
            r#"    <div class="column">
      <div class="column-header">{title}</div>
      <div class="task-list">
{tasks}      </div>
    </div>
"#,
            title = escape_html(&category.title),
            tasks = render_tasks(dash.tasks.tasks(&category.key), &dash.render),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{Category, DashboardConfig, ZoneConfig};
    use crate::model::task::{CategoryBucket, Task};
    use crate::ops::dashboard::assemble;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample(weather: &str, hour: u32) -> Dashboard {
        let config = DashboardConfig::default();
        let mut tasks = CategoryBucket::empty(config.category_keys());
        tasks.push("vdpam", Task::new("Budget review", false).with_subtask("Pull numbers", true));
        tasks.push("personal", Task::new("Dentist", true));
        let now = Utc.with_ymd_and_hms(2025, 1, 7, hour, 0, 0).unwrap();
        assemble(&config, tasks, weather.to_string(), now)
    }

    #[test]
    fn renders_every_part() {
        // 18:00 UTC is noon Central
        let html = render_page(&sample("72°F Sunny", 18));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard</title>"));
        assert!(html.contains(r#"<div class="date">Tue, Jan 7, 2025</div>"#));
        assert!(html.contains(r#"<div class="weather">Ames: 72°F Sunny</div>"#));
        assert!(html.contains(r#"<div class="tz tz-primary">
      <div class="tz-label">CENTRAL</div>
      <div class="tz-time">12:00PM</div>"#));
        assert!(html.contains(r#"<div class="tz-label">INDIA</div>
      <div class="tz-time">11:30PM</div>"#));
        assert!(html.contains(r#"<span class="section-label">Section 7 of 12</span>"#));
        assert!(html.contains(r#"<span class="time-labels">6AM</span>"#));
        assert!(html.contains(r#"<span class="time-labels">6PM</span>"#));
        assert!(html.contains(r#"<div class="column-header">VDPAM</div>"#));
        assert!(html.contains(">Budget review<"));
        assert!(html.contains(">Pull numbers<"));
        assert!(html.contains(r#"<div class="updated">Updated: 12:00PM</div>"#));
    }

    #[test]
    fn empty_column_gets_placeholder() {
        let html = render_page(&sample("N/A", 18));
        let vdl = html
            .split(r#"<div class="column-header">VDL</div>"#)
            .nth(1)
            .unwrap();
        let vdl = vdl.split(r#"<div class="column">"#).next().unwrap();
        assert!(vdl.contains(">No tasks<"));
    }

    #[test]
    fn progress_box_count_is_fixed() {
        // 03:00 UTC is 9PM Central the day before; 10:00 UTC is 4AM
        for hour in [3, 10, 12, 18, 23] {
            let html = render_page(&sample("N/A", hour));
            assert_eq!(html.matches(r#"class="progress-box "#).count(), 12);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let dash = sample("Cloudy", 15);
        assert_eq!(render_page(&dash), render_page(&dash.clone()));
    }

    #[test]
    fn weather_and_labels_are_escaped() {
        let mut dash = sample("<img src=x>", 18);
        dash.categories = vec![Category::new("vdpam", "R&D")];
        let html = render_page(&dash);
        assert!(html.contains("Ames: &lt;img src=x&gt;"));
        assert!(html.contains(">R&amp;D<"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn single_zone_layout() {
        let config = DashboardConfig {
            zones: vec![ZoneConfig::new("Home", 1.0)],
            ..Default::default()
        };
        let tasks = CategoryBucket::empty(config.category_keys());
        let now = Utc.with_ymd_and_hms(2025, 1, 7, 8, 45, 0).unwrap();
        let html = render_page(&assemble(&config, tasks, "N/A".into(), now));
        assert_eq!(html.matches(r#"<div class="tz-time">"#).count(), 1);
        assert!(html.contains(r#"<div class="tz tz-primary">"#));
        assert!(html.contains("Updated: 9:45AM"));
        assert!(html.contains("Section 4 of 12"));
    }

    #[test]
    fn location_label_is_optional() {
        let mut dash = sample("Rain", 18);
        dash.weather_location.clear();
        let html = render_page(&dash);
        assert!(html.contains(r#"<div class="weather">Rain</div>"#));
    }
}
