use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration from inkdash.toml.
///
/// Every field is optional; defaults are documented in the template written
/// by `inkdash init` (see `io::config_io::CONFIG_TEMPLATE`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Page `<title>`
    #[serde(default = "default_title")]
    pub title: String,
    /// Where the generated page is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// User-Agent sent with every HTTP request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub tasks: TaskSource,
    #[serde(default)]
    pub weather: WeatherSource,
    #[serde(default)]
    pub day: DayWindow,
    #[serde(default)]
    pub render: RenderOptions,
    /// Columns, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    /// Clocks, in display order
    #[serde(default = "default_zones")]
    pub zones: Vec<ZoneConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: default_title(),
            output: default_output(),
            user_agent: default_user_agent(),
            tasks: TaskSource::default(),
            weather: WeatherSource::default(),
            day: DayWindow::default(),
            render: RenderOptions::default(),
            categories: default_categories(),
            zones: default_zones(),
        }
    }
}

impl DashboardConfig {
    /// Category keys in display order
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }
}

/// Shape of the task source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFormat {
    /// Rows of `category,task,parent,done`
    #[default]
    Csv,
    /// `{ "<category>": [{ "task": ..., "done": ... }] }`
    Json,
}

impl std::fmt::Display for TaskFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFormat::Csv => write!(f, "csv"),
            TaskFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSource {
    /// HTTP(S) URL, `file://` URL, or local path
    #[serde(default = "default_tasks_url")]
    pub url: String,
    #[serde(default)]
    pub format: TaskFormat,
    #[serde(default = "default_tasks_timeout")]
    pub timeout_secs: u64,
}

impl Default for TaskSource {
    fn default() -> Self {
        TaskSource {
            url: default_tasks_url(),
            format: TaskFormat::default(),
            timeout_secs: default_tasks_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSource {
    #[serde(default = "default_weather_url")]
    pub url: String,
    /// Label printed before the weather text, e.g. "Ames: 72°F Sunny"
    #[serde(default = "default_location")]
    pub location: String,
    /// Shown when the weather can't be fetched
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl Default for WeatherSource {
    fn default() -> Self {
        WeatherSource {
            url: default_weather_url(),
            location: default_location(),
            placeholder: default_placeholder(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

/// The daylight window the progress bar spans, in primary-zone hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First hour of the day (inclusive)
    #[serde(default = "default_day_start")]
    pub start: u32,
    /// Hour the day is complete (exclusive)
    #[serde(default = "default_day_end")]
    pub end: u32,
    /// Number of progress boxes
    #[serde(default = "default_sections")]
    pub sections: u32,
}

impl Default for DayWindow {
    fn default() -> Self {
        DayWindow {
            start: default_day_start(),
            end: default_day_end(),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Max grapheme clusters shown for a main task
    #[serde(default = "default_task_chars")]
    pub task_chars: usize,
    /// Max grapheme clusters shown for a subtask
    #[serde(default = "default_subtask_chars")]
    pub subtask_chars: usize,
    #[serde(default = "default_true")]
    pub show_subtasks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            task_chars: default_task_chars(),
            subtask_chars: default_subtask_chars(),
            show_subtasks: true,
        }
    }
}

/// A task column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lowercase key matched against the source's category field
    pub key: String,
    /// Column header
    pub title: String,
}

impl Category {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Category {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// A clock shown in the timezone row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub label: String,
    /// Hours from UTC; fractional offsets like 5.5 are allowed
    pub offset: f64,
    /// The primary zone drives the date, progress bar and "Updated" stamp
    #[serde(default)]
    pub primary: bool,
}

impl ZoneConfig {
    pub fn new(label: impl Into<String>, offset: f64) -> Self {
        ZoneConfig {
            label: label.into(),
            offset,
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

// Defaults: see io::config_io::CONFIG_TEMPLATE

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Dashboard".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_tasks_url() -> String {
    "tasks.csv".to_string()
}

fn default_tasks_timeout() -> u64 {
    15
}

fn default_weather_url() -> String {
    "https://wttr.in/Ames+Iowa?u&format=%t+%C".to_string()
}

fn default_location() -> String {
    "Ames".to_string()
}

fn default_placeholder() -> String {
    "N/A".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}

fn default_day_start() -> u32 {
    6
}

fn default_day_end() -> u32 {
    18
}

fn default_sections() -> u32 {
    12
}

fn default_task_chars() -> usize {
    28
}

fn default_subtask_chars() -> usize {
    24
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("vdpam", "VDPAM"),
        Category::new("vdl", "VDL"),
        Category::new("personal", "Personal"),
    ]
}

fn default_zones() -> Vec<ZoneConfig> {
    vec![
        ZoneConfig::new("Pacific", -8.0),
        ZoneConfig::new("Central", -6.0).primary(),
        ZoneConfig::new("Eastern", -5.0),
        ZoneConfig::new("India", 5.5),
    ]
}
