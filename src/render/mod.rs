pub mod page;
pub mod progress;
pub mod style;
pub mod tasks;

pub use page::render_page;
pub use progress::render_progress_bar;
pub use tasks::render_tasks;
