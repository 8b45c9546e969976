use crate::model::clock::ProgressState;
use crate::model::config::DayWindow;

/// Where `hour` falls in the default 6AM–6PM, twelve-section window
pub fn section(hour: u32) -> ProgressState {
    section_in(&DayWindow::default(), hour)
}

/// Where `hour` falls in `window`.
///
/// Before `start` nothing is filled; from `end` on everything is. In between
/// the window is split evenly into `sections` and the current one counts as
/// filled.
pub fn section_in(window: &DayWindow, hour: u32) -> ProgressState {
    if hour < window.start {
        return ProgressState::new(0, "Before Day");
    }
    if hour >= window.end {
        return ProgressState::new(window.sections, "Day Complete");
    }
    let span = u64::from(window.end - window.start);
    let elapsed = u64::from(hour - window.start);
    // elapsed < span, so the quotient is below sections
    let index = (elapsed * u64::from(window.sections) / span) as u32 + 1;
    ProgressState::new(index, format!("Section {} of {}", index, window.sections))
}
