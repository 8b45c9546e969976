use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::DashboardConfig;

/// Config file looked up in the working directory when `-c` isn't given
pub const DEFAULT_CONFIG_FILE: &str = "inkdash.toml";

/// Finest progress bar allowed: one box per minute of the day window
pub const MAX_SECTIONS_PER_HOUR: u32 = 60;

/// Written by `inkdash init`. Every value shown is the built-in default.
pub const CONFIG_TEMPLATE: &str = r##"# inkdash configuration. Every key is optional; the values below are the
# defaults used when a key (or this whole file) is missing.

title = "Dashboard"
# Overwritten on every run
output = "index.html"
# Published sheets reject requests without a browser-like agent
user_agent = "Mozilla/5.0"

[tasks]
# http(s) URL, file:// URL, or local path
url = "tasks.csv"
# "csv": header row `category,task,parent,done`; rows with a parent are subtasks
# "json": { "<category>": [{ "task": "...", "done": false }] }
format = "csv"
timeout_secs = 15

[weather]
url = "https://wttr.in/Ames+Iowa?u&format=%t+%C"
location = "Ames"
placeholder = "N/A"
timeout_secs = 10

# Progress bar window, in primary-zone hours
[day]
start = 6
end = 18
# At most 60 per hour of the window
sections = 12

[render]
task_chars = 28
subtask_chars = 24
show_subtasks = true

# Columns, in display order. Keys are matched against the lowercased
# category field of the task source.
[[categories]]
key = "vdpam"
title = "VDPAM"

[[categories]]
key = "vdl"
title = "VDL"

[[categories]]
key = "personal"
title = "Personal"

# Clocks, in display order. Offsets are hours from UTC (5.5 = +5:30).
# The primary zone drives the date, progress bar and "Updated" stamp.
[[zones]]
label = "Pacific"
offset = -8.0

[[zones]]
label = "Central"
offset = -6.0
primary = true

[[zones]]
label = "Eastern"
offset = -5.0

[[zones]]
label = "India"
offset = 5.5
"##;

/// Error type for reading and writing the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load configuration.
///
/// With an explicit path the file must exist. Without one, `inkdash.toml` in
/// the working directory is used if present, otherwise all defaults.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                return Ok(DashboardConfig::default());
            }
            default
        }
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    debug!(path = %path.display(), "loaded config");
    parse_config(&text)
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

/// Check the invariants the pipeline relies on
pub fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
    let day = &config.day;
    if day.start >= day.end || day.end > 24 {
        return Err(ConfigError::Invalid(format!(
            "day window must satisfy start < end <= 24 (got start = {}, end = {})",
            day.start, day.end
        )));
    }
    if day.sections == 0 {
        return Err(ConfigError::Invalid("day.sections must be at least 1".into()));
    }
    let max_sections = MAX_SECTIONS_PER_HOUR * (day.end - day.start);
    if day.sections > max_sections {
        return Err(ConfigError::Invalid(format!(
            "day.sections must be at most {} for a {}-hour window (got {})",
            max_sections,
            day.end - day.start,
            day.sections
        )));
    }
    let mut seen = HashSet::new();
    for category in &config.categories {
        if !seen.insert(category.key.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "duplicate category key '{}'",
                category.key
            )));
        }
    }
    if config.categories.is_empty() {
        return Err(ConfigError::Invalid("at least one category is required".into()));
    }
    for category in &config.categories {
        if category.key.is_empty() || category.key != category.key.to_lowercase() {
            return Err(ConfigError::Invalid(format!(
                "category key '{}' must be non-empty and lowercase",
                category.key
            )));
        }
    }
    if config.zones.is_empty() {
        return Err(ConfigError::Invalid("at least one zone is required".into()));
    }
    for zone in &config.zones {
        if !zone.offset.is_finite() || zone.offset.abs() >= 24.0 {
            return Err(ConfigError::Invalid(format!(
                "zone '{}' offset {} is out of range",
                zone.label, zone.offset
            )));
        }
    }
    if config.zones.iter().filter(|z| z.primary).count() > 1 {
        return Err(ConfigError::Invalid("only one zone can be primary".into()));
    }
    Ok(())
}

/// Write the commented template to `path`
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
