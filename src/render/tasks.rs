use std::fmt::Write;

use crate::model::config::RenderOptions;
use crate::model::task::{Task, checkbox_char};
use crate::util::html::escape_html;
use crate::util::unicode::truncate_graphemes;

/// Placeholder row text for an empty column
pub const NO_TASKS: &str = "No tasks";

/// Render one category column's task list.
///
/// One row per task, then (when enabled) one indented row per subtask.
/// Names are cut to the configured caps before escaping.
pub fn render_tasks(tasks: &[Task], options: &RenderOptions) -> String {
    let mut html = String::new();
    if tasks.is_empty() {
        push_row(&mut html, "task", NO_TASKS, false);
        return html;
    }
    for task in tasks {
        push_row(
            &mut html,
            "task",
            truncate_graphemes(&task.name, options.task_chars),
            task.done,
        );
        if !options.show_subtasks {
            continue;
        }
        for sub in &task.subtasks {
            push_row(
                &mut html,
                "task subtask",
                truncate_graphemes(&sub.name, options.subtask_chars),
                sub.done,
            );
        }
    }
    html
}

fn push_row(html: &mut String, class: &str, text: &str, done: bool) {
    let text_class = if done { "task-text done" } else { "task-text" };
    let _ = writeln!(
        html,
        r#"<div class="{class}"><span class="checkbox">{checkbox}</span><span class="{text_class}">{text}</span></div>"#,
        checkbox = checkbox_char(done),
        text = escape_html(text),
    );
}
