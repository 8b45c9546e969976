use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// The current time in one configured zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeZoneReading {
    pub label: String,
    pub offset_hours: f64,
    pub local: DateTime<FixedOffset>,
    pub primary: bool,
}

/// Position within the day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    /// Number of filled sections, `0..=sections`
    pub index: u32,
    pub label: String,
}

impl ProgressState {
    pub fn new(index: u32, label: impl Into<String>) -> Self {
        ProgressState {
            index,
            label: label.into(),
        }
    }
}
