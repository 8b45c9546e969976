pub mod clock;
pub mod dashboard;
pub mod progress;
