use super::clock::{ProgressState, TimeZoneReading};
use super::config::{Category, DayWindow, RenderOptions};
use super::task::CategoryBucket;

/// Everything one page render needs, computed once per run
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    /// Date in the primary zone, e.g. "Mon, Jan 6, 2025"
    pub date: String,
    pub weather_location: String,
    pub weather: String,
    /// Readings in display order
    pub zones: Vec<TimeZoneReading>,
    /// The reading that drives the date and progress
    pub primary: TimeZoneReading,
    pub day: DayWindow,
    pub progress: ProgressState,
    pub categories: Vec<Category>,
    pub tasks: CategoryBucket,
    pub render: RenderOptions,
}
