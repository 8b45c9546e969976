pub mod clock;
pub mod config;
pub mod dashboard;
pub mod task;

pub use clock::*;
pub use config::*;
pub use dashboard::*;
pub use task::*;
