use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

use crate::model::clock::TimeZoneReading;
use crate::model::config::ZoneConfig;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Fixed offset for a possibly fractional hour count.
///
/// The whole-hour part and the remaining minutes are both truncated toward
/// zero, so `-5.5` is five hours thirty minutes west. Returns `None` when the
/// offset is a day or more.
pub fn zone_offset(offset_hours: f64) -> Option<FixedOffset> {
    let hours = offset_hours.trunc();
    let minutes = ((offset_hours - hours) * 60.0).trunc();
    FixedOffset::east_opt(hours as i32 * 3600 + minutes as i32 * 60)
}

/// The UTC instant shifted into a zone. Out-of-range offsets fall back to UTC.
pub fn zone_time(utc: DateTime<Utc>, offset_hours: f64) -> DateTime<FixedOffset> {
    let offset = zone_offset(offset_hours).unwrap_or_else(|| Utc.fix());
    utc.with_timezone(&offset)
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

/// `H:MMAM` / `H:MMPM`, e.g. `6:05PM`
pub fn format_time_short<T: Timelike>(time: &T) -> String {
    let (hour, meridiem) = twelve_hour(time.hour());
    format!("{}:{:02}{}", hour, time.minute(), meridiem)
}

/// Bare hour label for the ends of the progress bar, e.g. `6AM`
pub fn format_hour_label(hour: u32) -> String {
    let (hour, meridiem) = twelve_hour(hour % 24);
    format!("{}{}", hour, meridiem)
}

/// `Www, Mmm D, YYYY`, e.g. `Mon, Jan 6, 2025`
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!(
        "{}, {} {}, {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// One reading per configured zone, in configuration order.
///
/// The first zone flagged primary (or the first zone) is marked primary. An
/// empty configuration yields a single primary UTC reading.
pub fn read_zones(utc: DateTime<Utc>, zones: &[ZoneConfig]) -> Vec<TimeZoneReading> {
    if zones.is_empty() {
        return vec![utc_reading(utc)];
    }
    let primary = zones.iter().position(|z| z.primary).unwrap_or(0);
    zones
        .iter()
        .enumerate()
        .map(|(i, zone)| TimeZoneReading {
            label: zone.label.clone(),
            offset_hours: zone.offset,
            local: zone_time(utc, zone.offset),
            primary: i == primary,
        })
        .collect()
}

/// The primary reading: the flagged one, else the first, else UTC
pub fn primary_reading(utc: DateTime<Utc>, readings: &[TimeZoneReading]) -> TimeZoneReading {
    readings
        .iter()
        .find(|r| r.primary)
        .or_else(|| readings.first())
        .cloned()
        .unwrap_or_else(|| utc_reading(utc))
}

fn utc_reading(utc: DateTime<Utc>) -> TimeZoneReading {
    TimeZoneReading {
        label: "UTC".to_string(),
        offset_hours: 0.0,
        local: zone_time(utc, 0.0),
        primary: true,
    }
}
