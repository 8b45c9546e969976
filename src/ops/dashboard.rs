use chrono::{DateTime, Timelike, Utc};
use tracing::info;

use crate::io::fetch::{Fetcher, fetch_tasks, fetch_weather};
use crate::model::config::DashboardConfig;
use crate::model::dashboard::Dashboard;
use crate::model::task::CategoryBucket;
use crate::ops::clock::{format_date, format_time_short, primary_reading, read_zones};
use crate::ops::progress::section_in;

/// Fetch both sources and compute the page state for `now`.
///
/// Fetch failures degrade to empty columns and the weather placeholder.
pub fn collect(config: &DashboardConfig, fetcher: &Fetcher, now: DateTime<Utc>) -> Dashboard {
    info!(source = %config.tasks.url, format = %config.tasks.format, "fetching tasks");
    let tasks = fetch_tasks(fetcher, &config.tasks, &config.categories);

    info!(source = %config.weather.url, "fetching weather");
    let weather = fetch_weather(fetcher, &config.weather);

    let dash = assemble(config, tasks, weather, now);
    log_summary(&dash);
    dash
}

/// Compute the page state from already-fetched data
pub fn assemble(
    config: &DashboardConfig,
    tasks: CategoryBucket,
    weather: String,
    now: DateTime<Utc>,
) -> Dashboard {
    let zones = read_zones(now, &config.zones);
    let primary = primary_reading(now, &zones);
    let progress = section_in(&config.day, primary.local.hour());

    Dashboard {
        title: config.title.clone(),
        date: format_date(&primary.local),
        weather_location: config.weather.location.clone(),
        weather,
        zones,
        primary,
        day: config.day,
        progress,
        categories: config.categories.clone(),
        tasks,
        render: config.render,
    }
}

fn log_summary(dash: &Dashboard) {
    let times = dash
        .zones
        .iter()
        .map(|z| format!("{}: {}", z.label, format_time_short(&z.local)))
        .collect::<Vec<_>>()
        .join(", ");
    info!("{times}");
    info!("section: {}", dash.progress.label);
    info!("weather: {}", dash.weather);
    let counts = dash
        .categories
        .iter()
        .map(|c| format!("{}={}", c.title, dash.tasks.tasks(&c.key).len()))
        .collect::<Vec<_>>()
        .join(", ");
    info!("tasks loaded: {counts}");
}
